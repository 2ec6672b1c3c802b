//! Global CSS for the Harborline site.
//!
//! Only the layout and the state classes the page toggles live here:
//! `scrolled`, `active`, `collapsed`, `fading`, and the toast kinds.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --navy: #0b2545;
  --navy-light: #13315c;
  --sea: #1b98e0;
  --sand: #f4ede1;
  --white: #ffffff;
  --text: #1d2733;
  --text-muted: #5b6776;
  --success: #2e9e6a;
  --error: #d64545;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-serif: 'Playfair Display', Georgia, serif;

  --nav-height: 76px;
  --radius: 10px;
  --shadow: 0 10px 30px rgba(11, 37, 69, 0.12);
  --transition: 0.3s ease;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
  font-family: var(--font-sans);
  color: var(--text);
  background: var(--white);
  line-height: 1.6;
}

h1, h2, h3 { font-family: var(--font-serif); }

a { color: inherit; text-decoration: none; }

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  border: 2px solid transparent;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition), color var(--transition);
}
.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-primary { background: var(--sea); color: var(--white); }
.btn-primary:hover:not(:disabled) { background: var(--navy-light); }
.btn-secondary { background: var(--white); color: var(--navy); }
.btn-outline { border-color: var(--navy); color: var(--navy); background: transparent; }
.btn-outline:hover { background: var(--navy); color: var(--white); }

/* === Navbar === */
.navbar {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 100;
  background: transparent;
  transition: background var(--transition), box-shadow var(--transition);
}
.navbar.scrolled { background: var(--white); box-shadow: var(--shadow); }

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  height: var(--nav-height);
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  color: var(--white);
  transition: height var(--transition), color var(--transition);
}
.nav-container.scrolled { height: 64px; color: var(--navy); }

.logo { display: flex; align-items: center; gap: 0.5rem; font-size: 1.4rem; font-weight: 700; }

.nav-links { display: flex; align-items: center; gap: 2rem; list-style: none; }

.mobile-menu-btn {
  display: none;
  background: none;
  border: none;
  color: inherit;
  font-size: 1.75rem;
  cursor: pointer;
}

@media (max-width: 768px) {
  .mobile-menu-btn { display: block; }
  .nav-links {
    position: absolute;
    top: var(--nav-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1.5rem;
    background: var(--white);
    color: var(--navy);
    box-shadow: var(--shadow);
    transform: translateY(-150%);
    transition: transform var(--transition);
  }
  .nav-links.active { transform: translateY(0); }
}

/* === Hero slider === */
.hero { position: relative; height: 100vh; min-height: 560px; overflow: hidden; }
.hero-slider { position: relative; height: 100%; }
.hero-slide {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
  opacity: 0;
  transition: opacity 1s ease;
}
.hero-slide.active { opacity: 1; z-index: 1; }
.hero-overlay { position: absolute; inset: 0; background: linear-gradient(rgba(11, 37, 69, 0.55), rgba(11, 37, 69, 0.25)); }
.hero-content {
  position: relative;
  z-index: 2;
  max-width: 760px;
  margin: 0 auto;
  height: 100%;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 1.25rem;
  padding: 0 1.5rem;
  color: var(--white);
}
.hero-content h1 { font-size: clamp(2.4rem, 5vw, 4rem); line-height: 1.1; }
.hero-content.static { background: var(--navy); max-width: none; align-items: center; }
.hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }

.slider-dots {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 3;
  display: flex;
  gap: 0.6rem;
}
.dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  border: 2px solid var(--white);
  background: transparent;
  cursor: pointer;
  transition: background var(--transition), transform var(--transition);
}
.dot.active { background: var(--white); transform: scale(1.2); }

/* === Sections === */
section { padding: 6rem 1.5rem; }
.section-header { max-width: 720px; margin: 0 auto 3rem; text-align: center; }
.section-header h2 { font-size: 2.4rem; color: var(--navy); }
.section-header p { color: var(--text-muted); }

/* === Fleet === */
.fleet { background: var(--sand); }
.fleet-grid {
  max-width: 1200px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 2rem;
}
.fleet-grid.collapsed .fleet-card:nth-child(n + 4) { display: none; }
.fleet-card { background: var(--white); border-radius: var(--radius); overflow: hidden; box-shadow: var(--shadow); }
.fleet-card img { width: 100%; height: 220px; object-fit: cover; display: block; }
.fleet-card-body { padding: 1.25rem 1.5rem 1.5rem; }
.fleet-kind { color: var(--text-muted); }
.fleet-meta { display: flex; justify-content: space-between; margin-top: 1rem; }
.fleet-rate { font-weight: 700; color: var(--sea); }
.fleet-actions { text-align: center; margin-top: 2.5rem; }

/* === FAQ === */
.faq-list { max-width: 820px; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
.faq-item { border: 1px solid #e3e7ed; border-radius: var(--radius); padding: 1.25rem 1.5rem; cursor: pointer; }
.faq-question { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.faq-answer { max-height: 0; overflow: hidden; color: var(--text-muted); transition: max-height var(--transition), margin var(--transition); }
.faq-item.active { border-color: var(--sea); }
.faq-item.active .faq-answer { max-height: 400px; margin-top: 0.75rem; }

/* === Contact === */
.contact {
  max-width: 1200px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1fr 1.2fr;
  gap: 3rem;
}
.contact-details { list-style: none; margin-top: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; }
.form-group { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; }
.form-group input, .form-group textarea {
  font: inherit;
  padding: 0.75rem 1rem;
  border: 1px solid #d5dbe3;
  border-radius: var(--radius);
}
.form-group input:focus, .form-group textarea:focus { outline: 2px solid var(--sea); border-color: transparent; }
@media (max-width: 768px) { .contact { grid-template-columns: 1fr; } }

/* === Footer === */
.footer { background: var(--navy); color: var(--white); padding: 4rem 1.5rem 2rem; }
.footer-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; }
.footer-links ul { list-style: none; }
.newsletter-form { display: flex; gap: 0.5rem; align-items: flex-start; }
.newsletter-form .form-group { flex: 1; }
.footer-bottom { text-align: center; margin-top: 3rem; color: rgba(255, 255, 255, 0.6); }

/* === Back to top === */
.back-to-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 90;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  display: grid;
  place-items: center;
  background: var(--sea);
  color: var(--white);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition), visibility var(--transition);
}
.back-to-top.active { opacity: 1; visibility: visible; }

/* === Toasts === */
.toast-container {
  position: fixed;
  top: calc(var(--nav-height) + 1rem);
  right: 1.5rem;
  z-index: 200;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}
.toast {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  min-width: 260px;
  max-width: 380px;
  padding: 0.9rem 1.2rem;
  border-radius: var(--radius);
  background: var(--white);
  box-shadow: var(--shadow);
  border-left: 4px solid var(--success);
  animation: slideIn 0.3s ease;
}
.toast.success i { color: var(--success); }
.toast.error { border-left-color: var(--error); }
.toast.error i { color: var(--error); }
.toast.fading { animation: fadeOut 0.3s ease forwards; }

@keyframes slideIn {
  from { transform: translateX(110%); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes fadeOut {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(110%); opacity: 0; }
}
"#;
