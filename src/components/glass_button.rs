use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlassButtonProps {
    #[prop_or_default]
    pub label: String,
    pub href: String,
    #[prop_or_default]
    pub icon: Option<String>,
    /// Renders the compact circular variant used in the contacts row.
    #[prop_or(false)]
    pub contact: bool,
}

#[function_component(GlassButton)]
pub fn glass_button(props: &GlassButtonProps) -> Html {
    let class = if props.contact {
        "contact-btn"
    } else {
        "glass-btn"
    };
    html! {
        <a class={class} href={props.href.clone()} target="_blank" rel="noopener noreferrer">
            {
                if let Some(icon) = &props.icon {
                    html! { <i class={icon.clone()}></i> }
                } else {
                    html! {}
                }
            }
            {
                if !props.label.is_empty() {
                    html! { <span>{ &props.label }</span> }
                } else {
                    html! {}
                }
            }
        </a>
    }
}
