use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;
use crate::nav::SectionId;

#[derive(Properties, PartialEq)]
pub struct TrackedSectionProps {
    pub section: SectionId,
    pub on_visibility: Callback<(SectionId, bool)>,
    pub children: Children,
}

/// Reports when its children enter or leave the middle band of the viewport.
#[function_component(TrackedSection)]
pub fn tracked_section(props: &TrackedSectionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_reveal(node.clone(), config::NAV_TRACKING);

    {
        let on_visibility = props.on_visibility.clone();
        let section = props.section;
        use_effect_with_deps(
            move |in_view| {
                on_visibility.emit((section, *in_view));
                || ()
            },
            in_view,
        );
    }

    html! {
        <div ref={node}>
            { for props.children.iter() }
        </div>
    }
}
