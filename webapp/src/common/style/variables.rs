pub const CSS_VARIABLES: &str = r#"
:root {
  /* Sunset palette */
  --sunset-yellow: rgba(250, 204, 21, 0.9);
  --sunset-orange: rgba(249, 115, 22, 0.9);
  --sunset-pink: rgba(236, 72, 153, 0.9);

  /* Translucent whites used on top of the gradient */
  --glass-border: rgba(255, 255, 255, 0.3);
  --glass-fill: rgba(255, 255, 255, 0.1);
  --glass-button: rgba(255, 255, 255, 0.2);
  --glass-button-hover: rgba(255, 255, 255, 0.3);
  --text-muted: rgba(255, 255, 255, 0.8);
  --backdrop: rgba(0, 0, 0, 0.5);

  /* Neutrals for the page around the map */
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-700: #374151;
  --neutral-900: #111827;
  --background: var(--neutral-100);
  --text-primary: var(--neutral-900);

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-20: 80px;
  --space-32: 128px;

  /* Border Radius */
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-2xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-2xl: 0 25px 50px -12px rgba(0, 0, 0, 0.25);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 200ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
