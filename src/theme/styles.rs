//! Global CSS styles for CareLink.
//!
//! Calm clinical palette: white panels on a light grey background, a
//! single blue accent for actions and unread markers.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface-page: #f3f4f6;
  --surface-panel: #ffffff;
  --surface-hover: #f9fafb;
  --border: #e5e7eb;

  /* Accent */
  --accent: #2563eb;
  --accent-hover: #1d4ed8;
  --accent-soft: #eff6ff;
  --accent-text: #1e40af;

  /* Text */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* Semantic */

  /* Typography */
  --font-sans: 'Inter', 'Noto Sans TC', system-ui, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 1.5rem;

  /* Shape */
  --radius: 0.5rem;
  --radius-pill: 9999px;
  --shadow-panel: 0 1px 2px rgba(0, 0, 0, 0.05);

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--text-primary);
  background: var(--surface-page);
}

/* === Page === */
.messages-page {
  padding: 1.5rem;
  max-width: 1200px;
  margin: 0 auto;
}

.page-header {
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.page-subtitle {
  color: var(--text-secondary);
}

.messages-layout {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

.messages-layout-admin {
  grid-template-columns: 1fr 2fr;
}

/* === Roster === */
.patient-roster,
.thread-panel {
  background: var(--surface-panel);
  border-radius: var(--radius);
  box-shadow: var(--shadow-panel);
}

.roster-search {
  padding: 1rem;
  border-bottom: 1px solid var(--border);
}

.roster-list > * + * {
  border-top: 1px solid var(--border);
}

.roster-empty {
  padding: 1rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.btn-ghost.roster-item {
  display: flex;
  align-items: center;
  width: 100%;
  padding: 1rem;
  text-align: left;
  background: none;
  border: none;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.roster-item:hover {
  background: var(--surface-hover);
}

.roster-item.roster-item-selected {
  background: var(--accent-soft);
}

.roster-item-body {
  flex: 1;
}

.roster-item-name {
  font-weight: 500;
}

.roster-item-count {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Thread === */
.thread-header {
  padding: 1.5rem;
  border-bottom: 1px solid var(--border);
}

.thread-header h2 {
  font-size: var(--text-lg);
  font-weight: 500;
}

.thread-messages {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 1.5rem;
}

.thread-empty,
.thread-loading {
  text-align: center;
  color: var(--text-muted);
}

.empty-icon {
  font-size: 3rem;
}

.empty-text {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-primary);
}

.empty-hint {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
}

.loading-spinner {
  width: 2rem;
  height: 2rem;
  margin: 0 auto 0.5rem;
  border: 3px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Message Bubbles === */
.message-row {
  display: flex;
}

.message-row-sent {
  justify-content: flex-end;
}

.message-row-received {
  justify-content: flex-start;
}

.message-bubble {
  max-width: 32rem;
  padding: 1rem;
  border-radius: var(--radius);
}

.message-bubble-sent {
  background: var(--accent-soft);
  color: var(--accent-text);
}

.message-bubble-received {
  background: var(--surface-hover);
}

.message-bubble-content {
  font-size: var(--text-sm);
  white-space: pre-wrap;
}

.message-bubble-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Composer === */
.message-composer {
  display: flex;
  gap: 1rem;
  padding: 1rem;
  border-top: 1px solid var(--border);
}

.message-composer-input {
  flex: 1;
}

/* === Inputs === */
.input-field {
  width: 100%;
  padding: 0.5rem 1rem;
  font: inherit;
  border: 1px solid #d1d5db;
  border-radius: var(--radius);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 2px var(--accent-soft);
}

.search-input-wrapper {
  position: relative;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-muted);
}

.search-input {
  padding-left: 2.5rem;
}

/* === Buttons === */
.btn-primary,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  padding: 0.5rem 1rem;
  font: inherit;
  font-size: var(--text-sm);
  font-weight: 500;
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  color: #ffffff;
  background: var(--accent);
}

.btn-primary:hover {
  background: var(--accent-hover);
}

.btn-ghost {
  color: var(--text-secondary);
  background: transparent;
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  font-size: var(--text-xs);
  font-weight: 500;
}

.badge-info {
  padding: 0.125rem 0.625rem;
  color: var(--accent-text);
  background: #dbeafe;
  border-radius: var(--radius-pill);
}

.badge-subtle {
  color: var(--accent);
}
"#;
