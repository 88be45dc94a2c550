//! Global CSS styles for Recipe Finder.
//!
//! Warm kitchen palette: orange primary, hot pink filter accents, cream
//! section backgrounds.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Brand */
  --primary: #f59e0b;
  --primary-dark: #d97706;
  --accent-pink: #ff69b4;
  --accent-pink-soft: #fce7f3;

  /* Surfaces */
  --background: #fff8ee;
  --surface: #ffffff;
  --secondary: #fdebd3;
  --border: #e5e7eb;

  /* Text */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* Typography */
  --font-sans: 'Prompt', 'Noto Sans Thai', 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.875rem;
  --text-3xl: 2.5rem;

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
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: var(--primary-dark);
  text-decoration: none;
  font-weight: 600;
  transition: color var(--transition-fast);
}

a:hover {
  color: var(--primary);
}

.section-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: var(--text-2xl);
  font-weight: 700;
}

/* === Hero === */
.hero {
  position: relative;
  padding: 6rem 1rem;
  background: url('https://images.unsplash.com/photo-1504674900247-0877df9cc836') center / cover;
  color: #ffffff;
  text-align: center;
}

.hero__overlay {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
}

.hero__content {
  position: relative;
  z-index: 1;
  max-width: 48rem;
  margin: 0 auto;
}

.hero__title {
  font-size: var(--text-3xl);
  font-weight: 700;
  margin-bottom: 1.5rem;
  text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.7);
}

.hero__tagline {
  font-size: var(--text-xl);
  margin-bottom: 2rem;
  opacity: 0.9;
  text-shadow: 1px 1px 3px rgba(0, 0, 0, 0.7);
}

/* === Search Box === */
.search-box {
  position: relative;
  max-width: 36rem;
  margin: 0 auto;
}

.search-box__input {
  width: 100%;
  padding: 0.75rem 3.5rem 0.75rem 1.5rem;
  border: none;
  border-radius: 9999px;
  font-family: inherit;
  font-size: var(--text-lg);
  color: var(--text-primary);
}

.search-box__input:focus {
  outline: none;
  box-shadow: 0 0 0 2px #facc15;
}

.btn-search {
  position: absolute;
  right: 0.5rem;
  top: 50%;
  transform: translateY(-50%);
  padding: 0.5rem 0.65rem;
  border: none;
  border-radius: 9999px;
  background: var(--primary-dark);
  color: #ffffff;
  cursor: pointer;
  transition: background var(--transition-normal);
}

.btn-search:hover {
  background: var(--primary);
}

/* === Buttons === */
.btn-primary {
  padding: 0.5rem 1.25rem;
  border: none;
  border-radius: 9999px;
  background: var(--primary-dark);
  color: #ffffff;
  font-family: inherit;
  cursor: pointer;
}

.btn-ghost {
  padding: 0.5rem 1rem;
  border: none;
  background: transparent;
  color: var(--text-secondary);
  font-family: inherit;
  cursor: pointer;
}

.btn-ghost:hover {
  color: var(--primary-dark);
}

.icon-btn {
  display: inline-flex;
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: transparent;
  color: var(--text-secondary);
  font-size: var(--text-xl);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon-btn:hover,
.icon-btn.pressed {
  background: #f3f4f6;
}

/* === Features === */
.features {
  padding: 3rem 1rem;
  background: var(--surface);
}

.features .section-title {
  justify-content: center;
  margin-bottom: 3rem;
}

.features__grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
  max-width: 72rem;
  margin: 0 auto;
}

.feature-card {
  padding: 1.5rem;
  border-radius: 0.5rem;
  background: var(--background);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
  text-align: center;
  transition: transform var(--transition-normal);
}

.feature-card:hover {
  transform: scale(1.05);
}

.feature-card__icon {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.feature-card__title {
  font-size: var(--text-xl);
  margin-bottom: 0.5rem;
}

.feature-card__body {
  color: var(--text-secondary);
}

/* === Recipe Sections === */
.recipes-section {
  max-width: 72rem;
  margin: 0 auto;
  padding: 3rem 1rem;
}

.recipes-section__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.5rem;
}

.result-count {
  color: var(--text-muted);
}

.filter-panel {
  max-width: 64rem;
  margin: 0 auto 2rem;
  padding: 1rem;
  border-radius: 0.75rem;
  background: var(--secondary);
  box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);
}

.filter-panel__title {
  font-size: var(--text-lg);
  margin-bottom: 0.75rem;
}

.filter-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.pill {
  min-width: 100px;
  padding: 0.5rem 1rem;
  border: 2px solid var(--accent-pink);
  border-radius: 9999px;
  background: #ffffff;
  color: #000000;
  font-family: inherit;
  font-size: var(--text-sm);
  white-space: nowrap;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.pill:hover {
  background: var(--accent-pink-soft);
}

.pill.active {
  background: var(--accent-pink);
  color: #ffffff;
}

/* === Recipe Grid === */
.recipe-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.recipe-grid__empty {
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
}

.recipe-card {
  overflow: hidden;
  border-radius: 0.75rem;
  background: var(--surface);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
}

.recipe-card__image img {
  display: block;
  width: 100%;
  height: 12rem;
  object-fit: cover;
}

.recipe-card__body {
  padding: 1rem;
}

.recipe-card__title {
  font-size: var(--text-lg);
  margin-bottom: 0.25rem;
}

.recipe-card__description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  margin-bottom: 0.5rem;
}

.recipe-card__time {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.recipe-card__tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.375rem;
  margin-top: 0.5rem;
}

.tag {
  padding: 0.125rem 0.5rem;
  border-radius: 9999px;
  background: var(--accent-pink-soft);
  color: #9d174d;
  font-size: 0.75rem;
}

/* === Search Page === */
.search-page__bar {
  display: flex;
  align-items: center;
  gap: 1rem;
  max-width: 72rem;
  margin: 0 auto;
  padding: 1.5rem 1rem 0;
}

.search-page__bar .search-box {
  flex: 1;
  margin: 0;
}

.search-page__bar .search-box__input {
  border: 1px solid var(--border);
}

/* === Responsive === */
@media (max-width: 900px) {
  .features__grid,
  .recipe-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 600px) {
  .features__grid,
  .recipe-grid {
    grid-template-columns: 1fr;
  }

  .hero__title {
    font-size: var(--text-2xl);
  }
}
"#;
