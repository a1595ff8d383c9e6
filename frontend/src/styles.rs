use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Palette and base element styles. Pages toggle between the two palettes
/// through the `dark` class the theme puts on `<html>` and `<body>`.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --bg: #ffffff;
                --bg-alt: #f9fafb;
                --card: #ffffff;
                --text: #111827;
                --muted: #4b5563;
                --border: #e5e7eb;
                --primary: #2563eb;
                --primary-soft: #dbeafe;
                --secondary: #7c3aed;
                --danger: #dc2626;
                --success: #16a34a;
            }

            html.dark {
                --bg: #111827;
                --bg-alt: #1f2937;
                --card: #1f2937;
                --text: #f9fafb;
                --muted: #9ca3af;
                --border: #374151;
                --primary: #60a5fa;
                --primary-soft: #1e3a8a;
            }

            body {
                margin: 0;
                font-family: "Inter", system-ui, -apple-system, sans-serif;
                background: var(--bg);
                color: var(--text);
                line-height: 1.6;
                transition: background 0.2s ease, color 0.2s ease;
            }

            a {
                color: var(--primary);
            }

            .gradient-text {
                background: linear-gradient(90deg, var(--primary), var(--secondary));
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }

            .btn-primary, .btn-outline {
                display: inline-block;
                padding: 0.75rem 1.5rem;
                border-radius: 0.5rem;
                font-weight: 600;
                text-decoration: none;
                cursor: pointer;
                border: 2px solid var(--primary);
            }

            .btn-primary {
                background: var(--primary);
                color: #ffffff;
            }

            .btn-outline {
                background: transparent;
                color: var(--primary);
            }

            .btn-primary:disabled, .btn-outline:disabled {
                opacity: 0.6;
                cursor: not-allowed;
            }

            .btn-block {
                width: 100%;
                text-align: center;
            }

            .page-hero, .faq-hero, .blog-list-hero {
                text-align: center;
                padding: 7rem 1.5rem 3rem;
                background: var(--bg-alt);
            }

            section {
                max-width: 1200px;
                margin: 0 auto;
                padding: 3rem 1.5rem;
            }

            .form-field {
                display: flex;
                flex-direction: column;
                gap: 0.35rem;
                margin-bottom: 1.25rem;
                border: none;
                padding: 0;
            }

            .form-field input, .form-field select, .form-field textarea {
                padding: 0.75rem 1rem;
                border: 1px solid var(--border);
                border-radius: 0.5rem;
                background: var(--card);
                color: var(--text);
            }

            .form-field.has-error input, .form-field.has-error textarea, .form-field.has-error select {
                border-color: var(--danger);
            }

            .field-error, .form-error {
                color: var(--danger);
                font-size: 0.875rem;
            }

            .newsletter-success {
                color: var(--success);
            }

            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                background: transparent;
                transition: background 0.2s ease, box-shadow 0.2s ease;
            }

            .top-nav.scrolled {
                background: var(--card);
                box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
            }

            .faq-item .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                padding: 1rem;
                background: var(--card);
                color: var(--text);
                border: 1px solid var(--border);
                cursor: pointer;
            }

            .modal-backdrop {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.6);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 100;
            }

            .modal {
                background: var(--card);
                border-radius: 1rem;
                max-width: 560px;
                width: calc(100% - 2rem);
                max-height: 90vh;
                overflow-y: auto;
                padding: 1.5rem;
            }

            .star {
                font-size: 2rem;
                background: none;
                border: none;
                cursor: pointer;
                color: var(--muted);
            }

            .star.lit {
                color: #f59e0b;
            }

            .blog-code {
                background: var(--bg-alt);
                padding: 1rem;
                border-radius: 0.5rem;
                overflow-x: auto;
            }

            @media (max-width: 768px) {
                .nav-right {
                    display: none;
                }

                .nav-right.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    background: var(--card);
                    padding: 1rem;
                }
            }
        "#)} />
    }
}
