/// Style sheet for every page. The light palette lives on `:root`; the `dark`
/// class on `<html>` swaps in the dark one.
pub const SITE_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --primary-green: #10b981;
    --primary-green-dark: #059669;
    --primary-green-light: #34d399;
    --secondary-color: #f8fafc;
    --text-primary: #1e293b;
    --text-secondary: #64748b;
    --background: #ffffff;
    --border: #e2e8f0;
    --header-background: rgba(255, 255, 255, 0.95);
    --section-tint: linear-gradient(135deg, #f0fdf4 0%, #ecfdf5 100%);
    --gradient: linear-gradient(135deg, #10b981 0%, #059669 100%);
    --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
    --shadow-lg: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
}

.dark {
    --primary-green: #34d399;
    --primary-green-dark: #10b981;
    --primary-green-light: #6ee7b7;
    --secondary-color: #1e293b;
    --text-primary: #f1f5f9;
    --text-secondary: #cbd5e1;
    --background: #0f172a;
    --border: #334155;
    --header-background: rgba(15, 23, 42, 0.95);
    --section-tint: linear-gradient(135deg, #0f172a 0%, #1e293b 100%);
    --gradient: linear-gradient(135deg, #34d399 0%, #10b981 100%);
}

body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    line-height: 1.6;
    color: var(--text-primary);
    background: var(--background);
    overflow-x: hidden;
    transition: background-color 0.3s ease, color 0.3s ease;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 20px;
}

.btn {
    padding: 12px 24px;
    border: none;
    border-radius: 8px;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.3s ease;
    font-size: 16px;
    text-decoration: none;
    display: inline-block;
    text-align: center;
}

.btn-primary {
    background: var(--gradient);
    color: white;
}

.btn-primary:hover {
    transform: translateY(-2px);
    box-shadow: 0 10px 25px rgba(16, 185, 129, 0.3);
}

.btn-secondary {
    background: transparent;
    color: var(--text-primary);
    border: 2px solid var(--border);
}

.btn-secondary:hover {
    border-color: var(--primary-green);
    color: var(--primary-green);
}

.btn-outline {
    background: transparent;
    border: 2px solid var(--primary-green);
    color: var(--primary-green);
}

.btn-outline:hover {
    background: var(--primary-green);
    color: white;
}

.btn-large {
    font-size: 1.2rem;
    padding: 16px 32px;
}

.section-header {
    text-align: center;
    margin-bottom: 60px;
}

.section-header h2 {
    font-size: 2.5rem;
    margin-bottom: 16px;
    background: var(--gradient);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.section-header p {
    font-size: 1.2rem;
    color: var(--text-secondary);
    max-width: 600px;
    margin: 0 auto;
}

.gradient-text {
    background: var(--gradient);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

/* Header */
.header {
    position: fixed;
    top: 0;
    width: 100%;
    background: var(--header-background);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid var(--border);
    z-index: 1000;
    transition: all 0.3s ease;
}

.nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 0;
}

.logo {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--text-primary);
    text-decoration: none;
    cursor: pointer;
}

.logo-icon {
    font-size: 1.8rem;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 32px;
}

.nav-links a {
    text-decoration: none;
    color: var(--text-primary);
    font-weight: 500;
    transition: color 0.3s ease;
    cursor: pointer;
}

.nav-links a:hover {
    color: var(--primary-green);
}

.nav-links a.btn-primary {
    color: white;
}

.nav-cta {
    margin-left: 16px;
}

.nav-controls {
    display: flex;
    align-items: center;
    gap: 16px;
}

.nav-controls .dark-toggle {
    display: none;
}

.dark-toggle {
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
    padding: 8px;
    border-radius: 50%;
    transition: background 0.3s ease;
}

.dark-toggle:hover {
    background: var(--border);
}

.menu-toggle {
    display: none;
    flex-direction: column;
    background: none;
    border: none;
    cursor: pointer;
    gap: 4px;
}

.menu-toggle span {
    width: 25px;
    height: 3px;
    background: var(--text-primary);
    transition: 0.3s;
}

/* Hero */
.hero {
    padding: 120px 0 80px;
    background: var(--section-tint);
    transition: background 0.3s ease;
}

.hero-content {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 60px;
    align-items: center;
}

.hero-title {
    font-size: 3.5rem;
    font-weight: 700;
    line-height: 1.1;
    margin-bottom: 24px;
}

.hero-subtitle {
    font-size: 1.25rem;
    color: var(--text-secondary);
    margin-bottom: 32px;
    line-height: 1.6;
}

.hero-buttons {
    display: flex;
    gap: 16px;
    margin-bottom: 48px;
}

.hero-stats {
    display: flex;
    gap: 40px;
}

.stat {
    display: flex;
    flex-direction: column;
}

.stat strong {
    font-size: 2rem;
    font-weight: 700;
    color: var(--primary-green);
}

.stat span {
    color: var(--text-secondary);
    font-size: 0.9rem;
}

.hero-visual {
    display: flex;
    justify-content: center;
}

.code-window {
    background: #1a1b26;
    border-radius: 12px;
    padding: 16px;
    box-shadow: var(--shadow-lg);
    max-width: 400px;
    width: 100%;
}

.window-header {
    display: flex;
    align-items: center;
    margin-bottom: 16px;
}

.window-dots {
    display: flex;
    gap: 6px;
}

.window-dots span {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    background: #ff5f57;
}

.window-dots span:nth-child(2) {
    background: #ffbd2e;
}

.window-dots span:nth-child(3) {
    background: #28ca42;
}

.code-content {
    font-family: 'Fira Code', monospace;
    font-size: 0.9rem;
    line-height: 1.5;
    color: #f8f8f2;
}

.code-line {
    margin-bottom: 4px;
}

.indent {
    margin-left: 20px;
}

.double-indent {
    margin-left: 40px;
}

.code-keyword, .code-operator, .code-tag {
    color: #ff79c6;
}

.code-string {
    color: #f1fa8c;
}

.code-class {
    color: #8be9fd;
}

.code-property {
    color: #50fa7b;
}

.code-function {
    color: #ffb86c;
}

/* Features */
.features {
    padding: 80px 0;
    background: var(--background);
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 32px;
}

.feature-card {
    background: var(--background);
    padding: 40px 32px;
    border-radius: 12px;
    text-align: center;
    border: 1px solid var(--border);
    transition: all 0.3s ease;
    box-shadow: var(--shadow);
}

.feature-card:hover {
    transform: translateY(-8px);
    box-shadow: var(--shadow-lg);
    border-color: var(--primary-green);
}

.feature-icon {
    font-size: 3rem;
    margin-bottom: 20px;
}

.feature-card h3 {
    font-size: 1.5rem;
    margin-bottom: 16px;
    color: var(--text-primary);
}

.feature-card p {
    color: var(--text-secondary);
    line-height: 1.6;
}

/* Courses */
.courses {
    padding: 80px 0;
    background: var(--section-tint);
    transition: background 0.3s ease;
}

.courses-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
    gap: 32px;
}

.course-card {
    background: var(--background);
    padding: 32px;
    border-radius: 12px;
    box-shadow: var(--shadow);
    transition: all 0.3s ease;
    border: 1px solid var(--border);
}

.course-card:hover {
    transform: translateY(-5px);
    box-shadow: var(--shadow-lg);
}

.course-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 16px;
}

.course-header h3 {
    font-size: 1.5rem;
    margin-right: 16px;
}

.level-badge {
    padding: 4px 12px;
    border-radius: 20px;
    font-size: 0.8rem;
    font-weight: 600;
    white-space: nowrap;
}

.level-beginner {
    background: #d1fae5;
    color: #065f46;
}

.dark .level-beginner {
    background: #064e3b;
    color: #a7f3d0;
}

.level-intermediate {
    background: #fef3c7;
    color: #92400e;
}

.dark .level-intermediate {
    background: #78350f;
    color: #fcd34d;
}

.course-meta {
    display: flex;
    gap: 16px;
    margin-bottom: 20px;
    color: var(--text-secondary);
}

.course-topics h4 {
    margin-bottom: 12px;
    color: var(--text-primary);
}

.course-topics ul {
    list-style: none;
    margin-bottom: 24px;
}

.course-topics li {
    padding: 8px 0;
    border-bottom: 1px solid var(--border);
    position: relative;
    padding-left: 20px;
}

.course-topics li:before {
    content: '✓';
    position: absolute;
    left: 0;
    color: var(--primary-green);
    font-weight: bold;
}

.course-cta {
    width: 100%;
}

/* Call to action */
.cta-section {
    padding: 80px 0;
    background: var(--background);
    text-align: center;
}

.cta-buttons {
    display: flex;
    gap: 16px;
    justify-content: center;
    flex-wrap: wrap;
}

.cta-note {
    margin-top: 20px;
    color: var(--text-secondary);
}

/* Footer */
.footer {
    background: #1e293b;
    color: white;
    padding: 60px 0 30px;
}

.footer-content {
    display: grid;
    grid-template-columns: 2fr 1fr 1fr 1fr;
    gap: 40px;
    margin-bottom: 40px;
}

.footer-brand .logo {
    color: white;
    margin-bottom: 20px;
}

.footer-brand p {
    color: #cbd5e1;
    margin-bottom: 20px;
}

.social-links {
    display: flex;
    gap: 16px;
}

.footer-column h3 {
    margin-bottom: 20px;
    font-size: 1.2rem;
}

.footer-column ul {
    list-style: none;
}

.footer-column li {
    margin-bottom: 12px;
}

.footer-column a {
    color: #cbd5e1;
    text-decoration: none;
    transition: color 0.3s ease;
    cursor: pointer;
}

.footer-column a:hover {
    color: white;
}

.footer-bottom {
    text-align: center;
    padding-top: 30px;
    border-top: 1px solid #334155;
    color: #94a3b8;
}

/* Account and not-found pages */
.simple-page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 24px;
    padding: 40px 20px;
    text-align: center;
    background: var(--section-tint);
}

.simple-page h1 {
    font-size: 2.5rem;
}

.simple-page p {
    color: var(--text-secondary);
    max-width: 480px;
}

/* Responsive */
@media (max-width: 968px) {
    .hero-content {
        grid-template-columns: 1fr;
        text-align: center;
    }

    .hero-title {
        font-size: 2.5rem;
    }

    .hero-buttons,
    .hero-stats {
        justify-content: center;
    }

    .footer-content {
        grid-template-columns: 1fr 1fr;
        gap: 30px;
    }
}

@media (max-width: 768px) {
    .menu-toggle {
        display: flex;
    }

    .nav-controls .dark-toggle {
        display: block;
    }

    .nav-links .dark-toggle {
        display: none;
    }

    .nav-links {
        position: absolute;
        top: 100%;
        left: 0;
        width: 100%;
        background: var(--background);
        flex-direction: column;
        padding: 20px;
        border-top: 1px solid var(--border);
        transform: translateY(-100%);
        opacity: 0;
        visibility: hidden;
        transition: all 0.3s ease;
    }

    .nav-links-open {
        transform: translateY(0);
        opacity: 1;
        visibility: visible;
    }

    .hero-buttons {
        flex-direction: column;
    }

    .hero-stats {
        flex-direction: column;
        gap: 20px;
    }

    .section-header h2 {
        font-size: 2rem;
    }
}

@media (max-width: 480px) {
    .footer-content {
        grid-template-columns: 1fr;
    }

    .hero-title {
        font-size: 2rem;
    }
}
"#;
