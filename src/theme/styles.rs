//! Global CSS styles for Folio.
//!
//! Dark by default; `[data-theme="light"]` on the shell swaps the palette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root, [data-theme="dark"] {
  /* Backgrounds */
  --bg: #0d0f12;
  --bg-raised: #15181d;
  --border: #262a31;

  /* Accent */
  --accent: #e0a458;
  --accent-glow: rgba(224, 164, 88, 0.3);

  /* Text */
  --text-primary: #f2f2f2;
  --text-secondary: rgba(242, 242, 242, 0.7);
  --text-muted: rgba(242, 242, 242, 0.5);

  /* Semantic */
  --danger: #ff5c7a;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-fade: 500ms ease-in-out;
}

[data-theme="light"] {
  --bg: #fafaf7;
  --bg-raised: #ffffff;
  --border: #e2e0da;
  --accent: #b5651d;
  --accent-glow: rgba(181, 101, 29, 0.2);
  --text-primary: #1c1c1c;
  --text-secondary: rgba(28, 28, 28, 0.7);
  --text-muted: rgba(28, 28, 28, 0.5);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
}

.app {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--accent);
  letter-spacing: 0.05em;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-style: italic;
  color: var(--accent);
  margin: 2rem 0 1rem;
}

.body-text {
  font-size: var(--text-base);
  line-height: 1.7;
  color: var(--text-secondary);
}

.muted {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Shell === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 1.5rem;
  padding: 0.75rem 1.5rem;
  background: var(--bg-raised);
  border-bottom: 1px solid var(--border);
}

.site-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--accent);
}

.header-nav {
  display: flex;
  gap: 1rem;
  flex: 1;
}

.nav-link {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.nav-link:hover, .nav-link.active {
  color: var(--accent);
}

.sidebar-backdrop {
  position: fixed;
  inset: 0;
  z-index: 20;
  background: rgba(0, 0, 0, 0.4);
}

.sidebar {
  width: 240px;
  height: 100%;
  padding: 2rem 1.5rem;
  background: var(--bg-raised);
  border-right: 1px solid var(--border);
}

.sidebar-nav {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

@media (max-width: 767px) {
  .header-nav { display: none; }
}

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-link, .icon-btn {
  font-family: inherit;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  padding: 0.6rem 1.5rem;
  background: var(--accent);
  border: 1px solid var(--accent);
  border-radius: 4px;
  color: var(--bg);
}

.btn-ghost {
  padding: 0.6rem 1.5rem;
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--text-primary);
}

.btn-ghost:hover {
  border-color: var(--accent);
}

.btn-link {
  background: none;
  border: none;
  color: var(--accent);
}

.icon-btn {
  width: 2.25rem;
  height: 2.25rem;
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 50%;
  color: var(--text-primary);
}

.icon-btn:hover {
  border-color: var(--accent);
  box-shadow: 0 0 12px var(--accent-glow);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Inputs === */
.toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  gap: 1rem;
  margin: 1.5rem 0;
}

.search-input-wrapper {
  position: relative;
  display: flex;
  align-items: center;
  flex: 1;
  min-width: 220px;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  color: var(--text-muted);
}

.input-field {
  width: 100%;
  padding: 0.6rem 0.75rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: inherit;
}

.search-input {
  padding-left: 2rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
}

.search-clear {
  position: absolute;
  right: 0.5rem;
  background: none;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
}

.facet-select {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  min-width: 140px;
}

.input-label {
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

/* === Pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 1rem 0;
}

.pill {
  padding: 0.3rem 0.9rem;
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 999px;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  cursor: pointer;
}

.pill.selected {
  border-color: var(--accent);
  color: var(--accent);
}

/* === Status === */
.spinner-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  padding: 1.5rem;
  color: var(--text-muted);
}

.spinner {
  width: 1.5rem;
  height: 1.5rem;
  border: 2px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.load-error {
  padding: 1rem;
  border: 1px solid var(--danger);
  border-radius: 4px;
  color: var(--danger);
}

.empty-state {
  padding: 3rem 0;
  text-align: center;
  color: var(--text-muted);
}

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 0.75rem;
}

.thumbnail {
  display: block;
  aspect-ratio: 1 / 1;
  overflow: hidden;
  padding: 0;
  background: var(--bg-raised);
  border: none;
  border-radius: 4px;
  cursor: zoom-in;
}

.thumbnail img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.thumbnail:hover img {
  transform: scale(1.04);
}

.thumbnail.inline {
  aspect-ratio: auto;
  cursor: default;
}

.thumbnail.inline img {
  height: auto;
}

.thumbnail.inline figcaption {
  padding: 0.5rem 0;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

@media (max-width: 767px) {
  .gallery-grid { grid-template-columns: 1fr; }
}

.load-trigger {
  height: 1px;
}

.gallery-count {
  margin-top: 1rem;
  text-align: center;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: rgba(0, 0, 0, 0.92);
  outline: none;
}

.lightbox .close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  color: #fff;
}

.lightbox-stage {
  position: relative;
  width: min(90vw, 1400px);
  height: 80vh;
}

.lightbox-placeholder, .lightbox-full {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.lightbox-placeholder {
  filter: blur(12px);
  transform: scale(1.02);
  opacity: 1;
  transition: opacity var(--transition-fade);
}

.lightbox-placeholder.hidden {
  opacity: 0;
}

.lightbox-full {
  opacity: 0;
  transition: opacity var(--transition-fade);
}

.lightbox-full.visible {
  opacity: 1;
}

.lightbox-spinner {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
}

.lightbox-caption {
  display: flex;
  gap: 1rem;
  color: rgba(255, 255, 255, 0.8);
  font-size: var(--text-sm);
}

.lightbox-counter {
  color: rgba(255, 255, 255, 0.5);
}

/* === Timeline === */
.timeline-toolbar {
  justify-content: space-between;
  align-items: center;
}

.timeline {
  position: relative;
  list-style: none;
  display: grid;
  gap: 2rem;
}

.timeline::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 5rem;
  width: 1px;
  background: var(--border);
}

.milestone {
  position: relative;
  display: flex;
  align-items: flex-start;
  gap: 1rem;
}

.milestone-year {
  width: 4rem;
  flex-shrink: 0;
  padding-top: 0.25rem;
  text-align: right;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.milestone-dot {
  position: relative;
  z-index: 1;
  flex-shrink: 0;
  width: 0.75rem;
  height: 0.75rem;
  margin-top: 0.45rem;
  margin-left: -0.375rem;
  border-radius: 50%;
  background: var(--text-primary);
  border: 2px solid var(--bg);
}

.milestone-body {
  flex: 1;
  min-width: 0;
}

.milestone-title {
  font-size: var(--text-lg);
  color: var(--text-primary);
}

.milestone-title:hover {
  text-decoration: underline;
}

.milestone-open {
  padding: 0.25rem;
  color: var(--text-muted);
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.milestone:hover .milestone-open {
  opacity: 1;
}

/* === Cards and Lists === */
.card-list {
  display: grid;
  gap: 1rem;
}

.card {
  display: block;
  padding: 1.25rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 6px;
  transition: border-color var(--transition-fast);
}

.card:hover {
  border-color: var(--accent);
}

.card-title {
  font-size: var(--text-lg);
  color: var(--text-primary);
}

.card-meta {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.card-summary {
  margin-top: 0.75rem;
  color: var(--text-secondary);
  line-height: 1.6;
}

.tag-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-top: 0.75rem;
}

.tag {
  padding: 0.15rem 0.6rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

/* === Home === */
.hero {
  padding: 4rem 0 2rem;
}

.hero .tagline {
  margin-top: 1rem;
  max-width: 40rem;
}

.section-links {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1rem;
  margin-top: 2rem;
}

/* === Entry detail === */
.entry-header {
  margin-bottom: 1.5rem;
}

.entry-details {
  margin: 1rem 0 0 1.25rem;
  color: var(--text-secondary);
  line-height: 1.7;
}

.entry-links {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

/* === Blog === */
.post-header {
  margin-bottom: 2rem;
}

.post-cover {
  width: 100%;
  max-height: 420px;
  object-fit: cover;
  border-radius: 6px;
  margin-bottom: 1.5rem;
}

.post-content {
  max-width: 46rem;
  line-height: 1.8;
  color: var(--text-secondary);
}

.post-content h2, .post-content h3 {
  margin: 2rem 0 0.75rem;
  color: var(--text-primary);
}

.post-content p {
  margin-bottom: 1rem;
}

.post-content img {
  max-width: 100%;
}

.post-content pre {
  padding: 1rem;
  overflow-x: auto;
  background: var(--bg-raised);
  border-radius: 4px;
}

/* === Word Cloud === */
.word-cloud {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 0.5rem 1.25rem;
  padding: 2rem 0;
}

.cloud-word {
  color: var(--accent);
  line-height: 1.2;
  transition: transform var(--transition-fast);
}

.cloud-word:hover {
  transform: scale(1.08);
}
"#;
