pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-color);
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  border-color: var(--accent-color);
}

.btn-primary {
  background-color: var(--accent-color);
  border-color: var(--accent-color);
  color: var(--surface);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875em;
}

/* Forms */
.form-input, .theme-selector {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-color);
  font-size: 1em;
}

/* Cards */
.text-start {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-left: 4px solid var(--accent-color);
  border-radius: var(--radius-lg);
  padding: var(--space-4);
  margin-bottom: var(--space-4);
  box-shadow: var(--shadow-sm);
}

.text-start[hidden] {
  display: none;
}

/* Snippets */
.snippet-block {
  display: flex;
  align-items: flex-start;
  gap: var(--space-2);
  margin: var(--space-4) 0;
}

.snippet {
  flex: 1;
  padding: var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--background);
  border: 1px solid var(--border);
  overflow-x: auto;
}

/* Sections */
.section-toggle {
  background: none;
  border: none;
  color: var(--accent-color);
  font-size: 1.1em;
  font-weight: 600;
  cursor: pointer;
  padding: 0;
}

.section-body[hidden] {
  display: none;
}
"#;
