//! CSS for the site, injected once from `App`.
//!
//! Dark theme by default; the `.theme-light` class on the document root
//! flips the palette. Components never hardcode colors - everything goes
//! through the variables below so the theme toggle is a class swap.

/// Complete site CSS.
pub const SITE_CSS: &str = r#"
:root,
:root.theme-dark {
    --bg-base: #060a0c;
    --bg-raised: #0d1417;
    --bg-inset: #10191d;
    --text-bright: #d7e2e4;
    --text-dim: #8aa0a4;
    --text-muted: #4d6165;
    --border-subtle: rgba(215, 226, 228, 0.08);
    --border-visible: rgba(215, 226, 228, 0.18);
    --accent: #5eead4;
    --accent-dim: rgba(94, 234, 212, 0.12);
    --green: #34d399;
    --red: #f87171;
    --yellow: #fbbf24;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1100px;
}

:root.theme-light {
    --bg-base: #f6f8f8;
    --bg-raised: #ffffff;
    --bg-inset: #eef2f2;
    --text-bright: #17272b;
    --text-dim: #47595d;
    --text-muted: #8fa1a5;
    --border-subtle: rgba(23, 39, 43, 0.08);
    --border-visible: rgba(23, 39, 43, 0.18);
    --accent: #0d9488;
    --accent-dim: rgba(13, 148, 136, 0.1);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg-base);
    color: var(--text-bright);
    font-family: var(--font-mono);
    font-size: 15px;
    line-height: 1.6;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

a {
    color: var(--accent);
    text-decoration: none;
}

a:hover {
    text-decoration: underline;
}

/* --- Nav --- */

.nav {
    position: sticky;
    top: 0;
    z-index: 10;
    background: var(--bg-base);
    border-bottom: 1px solid var(--border-subtle);
}

.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 14px 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: baseline;
    gap: 8px;
    color: var(--text-bright);
}

.nav-brand:hover { text-decoration: none; }

.nav-logo {
    color: var(--accent);
    font-weight: 700;
}

.nav-title {
    font-weight: 700;
    letter-spacing: 0.02em;
}

.nav-version {
    color: var(--text-muted);
    font-size: 12px;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 20px;
}

.nav-link {
    color: var(--text-dim);
    font-size: 13px;
}

.nav-link:hover {
    color: var(--text-bright);
    text-decoration: none;
}

.nav-theme-toggle {
    background: transparent;
    color: var(--text-dim);
    border: 1px solid var(--border-visible);
    border-radius: 4px;
    padding: 4px 10px;
    font-family: inherit;
    font-size: 12px;
    cursor: pointer;
}

.nav-theme-toggle:hover {
    color: var(--accent);
    border-color: var(--accent);
}

/* --- Hero --- */

.hero {
    padding: 96px 0 72px;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    gap: 48px;
    align-items: center;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 4px 12px;
    border: 1px solid var(--border-visible);
    border-radius: 999px;
    color: var(--text-dim);
    font-size: 12px;
    margin-bottom: 24px;
}

.hero-badge-dot {
    width: 7px;
    height: 7px;
    border-radius: 50%;
    background: var(--green);
}

.hero-title {
    font-size: 40px;
    line-height: 1.15;
    margin: 0 0 16px;
}

.hero-title-accent {
    color: var(--accent);
}

.hero-description {
    color: var(--text-dim);
    max-width: 46ch;
    margin: 0 0 28px;
}

.hero-actions {
    display: flex;
    gap: 12px;
    margin-bottom: 24px;
}

.btn {
    display: inline-block;
    padding: 10px 20px;
    border-radius: 4px;
    font-size: 14px;
    border: 1px solid transparent;
}

.btn:hover { text-decoration: none; }

.btn-primary {
    background: var(--accent);
    color: var(--bg-base);
    font-weight: 700;
}

.btn-secondary {
    border-color: var(--border-visible);
    color: var(--text-bright);
}

.btn-secondary:hover { border-color: var(--accent); }

.code-block-with-copy {
    display: inline-flex;
    align-items: center;
    gap: 12px;
    background: var(--bg-inset);
    border: 1px solid var(--border-subtle);
    border-radius: 4px;
    padding: 8px 12px;
}

.code-block-content {
    color: var(--text-dim);
    font-size: 13px;
}

.code-copy-btn {
    background: transparent;
    border: none;
    color: var(--accent);
    font-family: inherit;
    font-size: 12px;
    cursor: pointer;
}

/* --- Hero terminal --- */

.hero-terminal {
    background: var(--bg-raised);
    border: 1px solid var(--border-visible);
    border-radius: 8px;
    overflow: hidden;
}

.terminal-header {
    display: flex;
    align-items: center;
    gap: 7px;
    padding: 10px 14px;
    border-bottom: 1px solid var(--border-subtle);
}

.terminal-dot {
    width: 11px;
    height: 11px;
    border-radius: 50%;
}

.terminal-dot.red { background: var(--red); }
.terminal-dot.yellow { background: var(--yellow); }
.terminal-dot.green { background: var(--green); }

.terminal-title {
    margin-left: 8px;
    color: var(--text-muted);
    font-size: 12px;
}

.terminal-body {
    padding: 16px;
    font-size: 13px;
}

.terminal-line {
    display: flex;
    gap: 8px;
}

.terminal-prompt { color: var(--accent); }
.terminal-command { color: var(--text-bright); }

.terminal-output { color: var(--text-dim); }
.terminal-output.muted { color: var(--text-muted); }
.terminal-output.success { color: var(--green); }
.terminal-output.highlight { color: var(--accent); }

/* --- Sections --- */

.section-header {
    max-width: 640px;
    margin-bottom: 48px;
}

.section-eyebrow {
    color: var(--accent);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    margin: 0 0 8px;
}

.section-title {
    font-size: 28px;
    margin: 0 0 12px;
}

.section-description {
    color: var(--text-dim);
    margin: 0;
}

/* --- Features --- */

.features {
    padding: 72px 0;
    border-top: 1px solid var(--border-subtle);
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 20px;
}

.feature-card {
    background: var(--bg-raised);
    border: 1px solid var(--border-subtle);
    border-radius: 8px;
    padding: 20px;
    display: flex;
    flex-direction: column;
    gap: 10px;
}

.feature-icon {
    color: var(--accent);
    font-size: 13px;
}

.feature-title {
    font-size: 16px;
    margin: 0;
}

.feature-description {
    color: var(--text-dim);
    font-size: 13px;
    margin: 0;
    flex: 1;
}

.feature-code {
    background: var(--bg-inset);
    border-radius: 4px;
    padding: 6px 10px;
    color: var(--text-dim);
    font-size: 12px;
    overflow-x: auto;
    white-space: nowrap;
}

/* --- Page headers --- */

.page-header {
    padding: 72px 0 40px;
    border-bottom: 1px solid var(--border-subtle);
}

.page-title {
    font-size: 36px;
    margin: 0 0 8px;
}

.page-description {
    color: var(--text-dim);
    margin: 0;
}

/* --- Blog index --- */

.blog {
    padding: 48px 0 72px;
}

.blog-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 20px;
}

.blog-card {
    display: flex;
    flex-direction: column;
    gap: 10px;
    background: var(--bg-raised);
    border: 1px solid var(--border-subtle);
    border-radius: 8px;
    padding: 22px;
    color: var(--text-bright);
}

.blog-card:hover {
    text-decoration: none;
    border-color: var(--accent);
}

.blog-meta {
    color: var(--text-muted);
    font-size: 12px;
}

.blog-title {
    font-size: 18px;
    margin: 0;
}

.blog-subtitle {
    color: var(--text-dim);
    font-size: 13px;
    margin: 0;
    flex: 1;
}

.blog-cta {
    color: var(--accent);
    font-size: 13px;
}

.blog-cta .arrow {
    margin-left: 6px;
}

.blog-footer {
    margin-top: 40px;
}

.blog-note {
    color: var(--text-muted);
    font-size: 13px;
}

/* --- Article --- */

.article {
    padding: 56px 0 72px;
}

.article-grid {
    display: grid;
    grid-template-columns: minmax(0, 1fr) 240px;
    gap: 48px;
    align-items: start;
}

.article-aside {
    position: sticky;
    top: 80px;
}

.article-cover {
    width: 100%;
    border-radius: 8px;
    border: 1px solid var(--border-subtle);
    margin-bottom: 24px;
}

.article-meta {
    color: var(--text-muted);
    font-size: 13px;
    margin: 0 0 8px;
}

.article-title {
    font-size: 34px;
    line-height: 1.2;
    margin: 0 0 12px;
}

.article-lede {
    color: var(--text-dim);
    font-size: 16px;
    margin: 0 0 32px;
}

.article-content h2 {
    font-size: 24px;
    margin: 40px 0 12px;
    scroll-margin-top: 80px;
}

.article-content h3 {
    font-size: 18px;
    margin: 28px 0 10px;
    scroll-margin-top: 80px;
}

.article-content p {
    color: var(--text-dim);
}

.article-content code {
    background: var(--bg-inset);
    border-radius: 3px;
    padding: 1px 5px;
    font-size: 13px;
}

.article-content pre {
    background: var(--bg-inset);
    border: 1px solid var(--border-subtle);
    border-radius: 6px;
    padding: 14px;
    overflow-x: auto;
}

.article-content pre code {
    background: transparent;
    padding: 0;
}

.article-back {
    margin-top: 48px;
}

/* --- On this page --- */

.on-this-page {
    border-left: 1px solid var(--border-visible);
    padding-left: 16px;
}

.otp-heading {
    color: var(--text-muted);
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    margin: 0 0 10px;
}

.otp-list {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 7px;
}

.otp-item-sub {
    padding-left: 14px;
}

.otp-link {
    color: var(--text-dim);
    font-size: 13px;
}

.otp-link:hover {
    color: var(--accent);
    text-decoration: none;
}

/* --- Footer --- */

.footer {
    border-top: 1px solid var(--border-subtle);
    padding: 40px 0;
}

.footer .container {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    flex-wrap: wrap;
}

.footer-brand {
    display: flex;
    align-items: baseline;
    gap: 8px;
}

.footer-logo { color: var(--accent); font-weight: 700; }
.footer-title { font-weight: 700; }

.footer-links {
    display: flex;
    gap: 18px;
}

.footer-link {
    color: var(--text-dim);
    font-size: 13px;
}

.footer-copyright {
    color: var(--text-muted);
    font-size: 12px;
    margin: 0;
}

/* --- Responsive --- */

@media (max-width: 900px) {
    .hero-grid { grid-template-columns: 1fr; }
    .features-grid { grid-template-columns: 1fr; }
    .blog-grid { grid-template-columns: 1fr; }
    .article-grid { grid-template-columns: 1fr; }
    .article-aside { position: static; order: -1; }
}
"#;
