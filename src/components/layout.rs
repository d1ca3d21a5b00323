//! Small layout wrappers shared by both pages.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("page-section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("container", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class="badge">{ for props.children.iter() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2>{ props.title.clone() }</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p>{ subtitle.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Site-wide base styles. Rendered once from the app root.
#[function_component(BaseStyles)]
pub fn base_styles() -> Html {
    html! {
        <style>
            {r#"
                *, *::before, *::after { box-sizing: border-box; }

                body {
                    margin: 0;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                    color: #0f172a;
                    background: #ffffff;
                    -webkit-font-smoothing: antialiased;
                }

                h1, h2, h3, h4 { margin: 0; }
                p { margin: 0; }
                ul { margin: 0; padding: 0; list-style: none; }

                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                @media (min-width: 640px) {
                    .container { padding: 0 1.5rem; }
                }

                @media (min-width: 1024px) {
                    .container { padding: 0 2rem; }
                }

                .page-section {
                    padding: 4rem 0;
                }

                @media (min-width: 768px) {
                    .page-section { padding: 6rem 0; }
                }

                .badge {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 500;
                    background: #dbeafe;
                    color: #1e40af;
                    margin-bottom: 1rem;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-heading h2 {
                    font-size: 2rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    margin-bottom: 1rem;
                }

                .section-heading p {
                    font-size: 1.125rem;
                    color: #475569;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    border: 2px solid transparent;
                    transition: background 0.2s ease, color 0.2s ease, border-color 0.2s ease;
                }

                .btn-primary {
                    background: #1e3a8a;
                    color: #ffffff;
                }

                .btn-primary:hover { background: #1e40af; }

                .btn-secondary {
                    background: #14b8a6;
                    color: #ffffff;
                }

                .btn-secondary:hover { background: #0d9488; }

                .btn-outline {
                    background: transparent;
                    color: #1e3a8a;
                    border-color: #1e3a8a;
                }

                .btn-outline:hover { background: #eff6ff; }

                .btn-light {
                    background: #ffffff;
                    color: #1e3a8a;
                }

                .btn-light:hover { background: #f1f5f9; }

                .btn-wide { width: 100%; }
                .btn-large { font-size: 1.125rem; padding: 0.875rem 2rem; }

                .cta-panel {
                    background: #1e3a8a;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                    color: #ffffff;
                    position: relative;
                    overflow: hidden;
                }

                @media (min-width: 768px) {
                    .cta-panel { padding: 4rem; }
                }

                .cta-panel h2 {
                    font-size: 2rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                @media (min-width: 768px) {
                    .cta-panel h2 { font-size: 3rem; }
                }

                .cta-panel > p {
                    font-size: 1.25rem;
                    color: #dbeafe;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }

                .check { color: #14b8a6; flex-shrink: 0; }
            "#}
        </style>
    }
}
