//! Embedded static assets: the site stylesheet and logo.

/// The site stylesheet, written to `assets/site.css`.
pub const SITE_CSS: &str = r#":root {
  --bg: #eef2f7;
  --surface: #ffffff;
  --ink: #13223b;
  --muted: #526077;
  --accent: #e67e22;
  --accent-strong: #c25c05;
  --line: #d7e0ea;
}
* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
body {
  font-family: "Segoe UI", Arial, sans-serif;
  color: var(--ink);
  background: var(--bg);
  line-height: 1.6;
}
a { color: inherit; text-decoration: none; }
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(255, 255, 255, 0.94);
  border-bottom: 1px solid var(--line);
}
.site-header-inner, .site-footer-inner, .page-wrap {
  width: min(1120px, calc(100% - 32px));
  margin: 0 auto;
}
.site-header-inner {
  display: flex;
  gap: 16px;
  align-items: center;
  justify-content: space-between;
  padding: 14px 0;
}
.logo {
  display: inline-flex;
  align-items: center;
  gap: 10px;
  font-weight: 800;
}
.logo-mark {
  width: 32px;
  height: 32px;
  border-radius: 10px;
  background: linear-gradient(135deg, #0b5ed7, #0ea5e9);
}
.site-nav { display: flex; align-items: center; gap: 8px; flex-wrap: wrap; }
.nav-link {
  padding: 8px 12px;
  border-radius: 999px;
  border: 1px solid transparent;
  color: var(--muted);
  font-size: 0.9rem;
}
.nav-link:hover { border-color: var(--line); color: var(--ink); }
.nav-link.active { color: var(--ink); border-color: #bcd3ee; background: #e8f3ff; }
.nav-cta {
  margin-left: 6px;
  padding: 9px 14px;
  border-radius: 10px;
  background: linear-gradient(135deg, #e67e22, #c25c05);
  color: #fff;
  font-size: 0.84rem;
  font-weight: 800;
}
.page-wrap { padding: 34px 0 56px; }
.hero-card, .content-card, .article-card, .disclosure-card, .author-card, .related-card {
  background: var(--surface);
  border: 1px solid var(--line);
  border-radius: 16px;
  box-shadow: 0 12px 24px rgba(11, 35, 68, 0.05);
}
.hero-card { padding: 34px; margin-bottom: 16px; }
.hero-kicker {
  display: inline-block;
  padding: 6px 10px;
  border-radius: 999px;
  border: 1px solid #bad7ef;
  background: #ecf7ff;
  color: #0a4a6f;
  font-weight: 700;
  font-size: 0.78rem;
}
.hero-card h1, .content-card h1, .article-card h1 {
  margin: 14px 0 10px;
  line-height: 1.25;
  font-size: clamp(1.8rem, 4vw, 2.8rem);
}
.hero-card p { margin: 0; color: var(--muted); max-width: 74ch; }
.hero-search-wrap { margin-top: 16px; }
.search-input {
  width: 100%;
  border: 1px solid var(--line);
  border-radius: 12px;
  padding: 12px 14px;
  font-size: 0.95rem;
}
.article-grid {
  margin-top: 22px;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 16px;
}
.article-link-card {
  overflow: hidden;
  border-radius: 14px;
  border: 1px solid var(--line);
  background: #fff;
}
.article-link-card:hover { border-color: #b6cbe3; }
.article-link-card h3 { margin: 0 0 8px; font-size: 1.02rem; line-height: 1.35; }
.article-link-card p { margin: 0; color: var(--muted); font-size: 0.9rem; }
.article-card-content { padding: 14px 15px 16px; }
.card-cta { margin-top: 9px; display: inline-flex; color: #0f4a87; font-weight: 700; font-size: 0.86rem; }
.article-card, .content-card { padding: 30px; margin-bottom: 16px; }
.breadcrumb { display: flex; gap: 8px; color: var(--muted); font-size: 0.9rem; margin: 0 0 12px; }
.breadcrumb a { color: #134e95; }
.meta-line { color: var(--muted); font-size: 0.92rem; margin: 0 0 18px; }
.disclosure-card {
  margin: 0 0 20px;
  padding: 14px 16px;
  border-left: 4px solid var(--accent);
  background: #fff8ef;
}
.disclosure-card strong { color: #8a4301; }
.article-body p { color: #273447; }
.feature-image img {
  width: 100%;
  border: 1px solid var(--line);
  border-radius: 14px;
  display: block;
}
.key-details { padding-left: 20px; color: #334155; }
.product-cta { text-align: center; margin: 24px 0; }
.buy-btn {
  display: inline-block;
  background: #ea580c;
  color: #fff;
  padding: 14px 40px;
  border-radius: 8px;
  font-weight: bold;
}
.author-card { padding: 18px 20px; margin-top: 24px; }
.author-name { font-weight: 800; }
.author-role { color: var(--muted); font-size: 0.9rem; }
.related-card { padding: 22px; margin-top: 20px; }
.related-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 12px;
}
.related-item { border: 1px solid var(--line); border-radius: 12px; background: #fff; }
.micro-note { color: var(--muted); font-size: 0.85rem; }
.footer-links { display: flex; gap: 12px; align-items: center; margin: 14px 0; }
.footer-links a { color: #134e95; font-weight: 700; }
.final-link-grid {
  margin-top: 10px;
  display: grid;
  gap: 8px;
  grid-template-columns: repeat(2, minmax(0, 1fr));
}
.final-link-grid a { color: #134e95; }
.final-contact { margin-top: 12px; color: var(--muted); font-size: 0.9rem; }
.site-footer { border-top: 1px solid var(--line); background: #fff; }
.site-footer-inner { padding: 26px 0 34px; display: grid; gap: 14px; }
.footer-columns {
  display: grid;
  gap: 14px;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
}
.footer-col { display: grid; gap: 6px; align-content: start; }
.footer-col h4 { margin: 0 0 4px; }
.footer-col a { color: var(--muted); font-size: 0.92rem; }
"#;

/// The site logo, written to `assets/site-logo.svg`.
pub const SITE_LOGO_SVG: &str = r#"<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 512 512' role='img' aria-label='Site logo'>
<defs>
  <linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>
    <stop offset='0%' stop-color='#0b5ed7'/>
    <stop offset='100%' stop-color='#0ea5e9'/>
  </linearGradient>
</defs>
<rect width='512' height='512' rx='96' fill='url(#g)'/>
<path d='M132 170h248v42H132zM132 236h248v42H132zM132 302h168v42H132z' fill='#ffffff' opacity='0.95'/>
</svg>
"#;
