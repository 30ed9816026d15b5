pub const CSS_VARIABLES: &str = r#"
:root {
  /* Layout */
  --header-height: 72px;
  --header-height-compact: 44px;
  --sidebar-width: 240px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  /* Typography */
  --font-size-base: 16px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}
"#;

// one block per api::prefs::Theme; the accent and text values must stay in sync with
// Theme::accent() and Theme::text_color(), which feed the diagram style
pub const THEMES: &str = r#"
.theme-blue {
  --accent-color: #005EB8;
  --accent-dark: #003087;
  --text-color: #212B32;
  --background: #F0F4F5;
  --surface: #FFFFFF;
  --border: #D8DDE0;
}

.theme-green {
  --accent-color: #007F3B;
  --accent-dark: #00401E;
  --text-color: #212B32;
  --background: #F2F7F4;
  --surface: #FFFFFF;
  --border: #D5E3DA;
}

.theme-purple {
  --accent-color: #330072;
  --accent-dark: #1F0047;
  --text-color: #212B32;
  --background: #F5F2F9;
  --surface: #FFFFFF;
  --border: #DDD5E8;
}

.theme-orange {
  --accent-color: #ED8B00;
  --accent-dark: #A35F00;
  --text-color: #212B32;
  --background: #FBF6EF;
  --surface: #FFFFFF;
  --border: #EADFCF;
}

.theme-contrast {
  --accent-color: #FFEB3B;
  --accent-dark: #FFFFFF;
  --text-color: #FFFFFF;
  --background: #000000;
  --surface: #000000;
  --border: #FFFFFF;
}

.dark-mode {
  --text-color: #E8EDEE;
  --background: #121619;
  --surface: #1E2428;
  --border: #3A4349;
}

.dark-mode.theme-contrast {
  --text-color: #FFFFFF;
  --background: #000000;
  --surface: #000000;
}

/* Text scale */
.scale-small { --font-size-base: 14px; }
.scale-medium { --font-size-base: 16px; }
.scale-large { --font-size-base: 19px; }
.scale-xlarge { --font-size-base: 22px; }
"#;
