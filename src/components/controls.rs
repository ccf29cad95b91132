use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Icon, IconKind};

#[derive(Properties, PartialEq)]
pub struct NavItemProps {
    pub label: AttrValue,
}

#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    html! {
        <a href="#" class="nav-item">{ props.label.clone() }</a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub primary: bool,
    #[prop_or_default]
    pub onclick: Callback<()>,
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };

    html! {
        <button
            class={classes!("cta-button", if props.primary { "primary" } else { "secondary" })}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: IconKind,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <Icon kind={props.icon} size={32} class={classes!("feature-icon")} />
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}
