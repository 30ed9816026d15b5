use constcat::concat;

mod components;
use components::BASE_COMPONENTS;

mod variables;
use variables::{CSS_VARIABLES, THEMES};

// everything the site needs, in cascade order
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: "Segoe UI", system-ui, -apple-system, sans-serif;
  line-height: 1.5;
}

a {
  color: var(--accent-color);
  text-decoration: none;
  cursor: pointer;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    THEMES,
    BASE_COMPONENTS,
    r#"
/* Site frame */
.site {
  min-height: 100vh;
  font-size: var(--font-size-base);
  color: var(--text-color);
  background-color: var(--background);
}

.banner-wrapper {
  background-color: var(--accent-color);
  color: var(--surface);
  padding: var(--space-4) var(--space-6);
  transition: padding var(--transition-fast) var(--easing-standard);
}

.banner-wrapper.shrink {
  padding: var(--space-1) var(--space-6);
}

.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.site-header .header-row {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  height: var(--header-height);
  padding: 0 var(--space-6);
  transition: height var(--transition-fast) var(--easing-standard);
}

.site-header.shrink .header-row {
  height: var(--header-height-compact);
}

.site-title {
  font-size: 1.4em;
  font-weight: 600;
}

.site-header.shrink .site-title {
  font-size: 1.1em;
}

.header-controls {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-left: auto;
}

#desktop-nav-toolbar {
  border-top: 1px solid var(--border);
  padding: 0 var(--space-6);
}

#desktop-nav-toolbar.hide-on-scroll {
  display: none;
}

/* Navigation */
.nav {
  list-style: none;
}

.nav li {
  position: relative;
}

.nav a, .nav .toggle-submenu {
  display: block;
  padding: var(--space-2) var(--space-3);
  color: var(--text-color);
  background: none;
  border: none;
  font: inherit;
  cursor: pointer;
}

.nav-horizontal {
  display: flex;
  gap: var(--space-2);
}

.nav-horizontal .submenu {
  position: absolute;
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  min-width: 180px;
}

.submenu {
  display: none;
  list-style: none;
  padding-left: var(--space-3);
}

.submenu.open {
  display: block;
}

/* Layout */
.site-layout {
  display: flex;
  max-width: var(--container-width);
  margin: 0 auto;
  gap: var(--space-6);
  padding: var(--space-6);
}

.sidebar {
  width: var(--sidebar-width);
  flex-shrink: 0;
}

.site-content {
  flex: 1;
  min-width: 0;
}

/* Pages */
.page {
  display: none;
}

.page.active {
  display: block;
  margin-bottom: var(--space-8);
}

.page-title {
  font-size: 1.8em;
  margin-bottom: var(--space-3);
}

.page-body {
  margin-bottom: var(--space-4);
}

.mermaid {
  margin: var(--space-4) 0;
}

@media (max-width: 800px) {
  .sidebar, #desktop-nav-toolbar {
    display: none;
  }
}
"#
);
