//! Global CSS styles for the Anuncia landing experience.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink-black: #0c0a14;
  --ink-lighter: #14101f;
  --ink-border: #241e33;

  /* VIOLET (Brand, Buttons, Accents) */
  --violet: #7c5cff;
  --violet-glow: rgba(124, 92, 255, 0.35);
  --violet-bright: #9d85ff;

  /* CORAL (Highlights, Hover) */
  --coral: #ff6b6b;
  --coral-glow: rgba(255, 107, 107, 0.3);

  /* TEXT */
  --text-primary: #f7f5ff;
  --text-secondary: rgba(247, 245, 255, 0.72);
  --text-muted: rgba(247, 245, 255, 0.5);

  /* Typography */
  --font-display: 'Sora', 'Segoe UI', sans-serif;
  --font-body: 'Inter', 'Helvetica Neue', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--ink-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 600;
  color: var(--text-primary);
  letter-spacing: -0.02em;
}

.section-header {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--text-primary);
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-secondary);
  line-height: 1.7;
}

/* === Navigation Header === */
.nav-header {
  border-bottom: 1px solid var(--ink-border);
  background: var(--ink-black);
}

.nav-header-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 1rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.app-title {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--violet-bright);
}

.nav-link {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--violet-bright);
}

/* === Promo Block === */
.promo-block {
  max-width: 1080px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
  text-align: center;
}

.promo-block--inline {
  padding-top: 6rem;
}

.promo-block--banner {
  max-width: none;
  margin-top: 4rem;
  background: linear-gradient(180deg, var(--ink-lighter), var(--ink-black));
  border-top: 1px solid var(--ink-border);
}

.promo-block__heading {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: -0.02em;
  color: var(--text-primary);
}

.promo-block--banner .promo-block__heading {
  font-size: var(--text-2xl);
}

.promo-block__body {
  max-width: 620px;
  margin: 1rem auto 2rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

/* === Call-to-action Button === */
.btn-cta {
  font-family: var(--font-display);
  font-size: var(--text-base);
  font-weight: 600;
  color: var(--text-primary);
  background: var(--violet);
  border: none;
  border-radius: 8px;
  padding: 0.85rem 2rem;
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-cta:hover {
  background: var(--violet-bright);
  box-shadow: 0 0 24px var(--violet-glow);
}

.btn-cta--large {
  font-size: var(--text-lg);
  padding: 1rem 2.75rem;
}

/* === Gallery Section === */
.gallery-section {
  max-width: 1080px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  text-align: center;
}

.gallery-section .body-text {
  margin: 0.5rem 0 2rem;
}

/* === Asset Grid === */
.asset-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.25rem;
}

.asset-cell {
  position: relative;
  aspect-ratio: 1 / 1;
  border-radius: 10px;
  overflow: hidden;
  border: 1px solid var(--ink-border);
  background: var(--ink-lighter);
}

.asset-cell__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.asset-cell__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: flex-end;
  padding: 0.75rem;
  background: linear-gradient(180deg, transparent 55%, rgba(12, 10, 20, 0.85));
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.asset-cell__overlay.visible {
  opacity: 1;
}

.asset-cell__label {
  font-size: var(--text-sm);
  color: var(--text-primary);
}

/* === Auth Page === */
.auth {
  max-width: 480px;
  margin: 0 auto;
  padding: 6rem 1.5rem;
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: center;
}

/* === Responsive === */
@media (max-width: 640px) {
  .promo-block__heading {
    font-size: var(--text-2xl);
  }

  .asset-grid {
    grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
  }
}
"#;
