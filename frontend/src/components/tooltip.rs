use shared::{TooltipSize, VisibleTooltip};
use web_sys::Element;
use yew::prelude::*;

use crate::services::date_utils::element_size;

#[derive(Properties, PartialEq)]
pub struct HolidayTooltipProps {
    pub tooltip: VisibleTooltip,
    /// Reports the rendered size so the tooltip can be clamped to the viewport
    pub on_measure: Callback<TooltipSize>,
}

#[function_component(HolidayTooltip)]
pub fn holiday_tooltip(props: &HolidayTooltipProps) -> Html {
    let node_ref = use_node_ref();

    {
        let node_ref = node_ref.clone();
        let on_measure = props.on_measure.clone();
        use_effect_with(props.tooltip.clone(), move |tooltip| {
            if tooltip.position.is_none() {
                if let Some(element) = node_ref.cast::<Element>() {
                    on_measure.emit(element_size(&element));
                }
            }
            || ()
        });
    }

    // Unplaced tooltips render invisibly at the cell so they can be measured
    let style = match props.tooltip.position {
        Some(position) => format!("left: {}px; top: {}px;", position.left, position.top),
        None => format!(
            "left: {}px; top: {}px; visibility: hidden;",
            props.tooltip.anchor.left, props.tooltip.anchor.top
        ),
    };

    html! {
        <div
            ref={node_ref}
            class={classes!("tooltip", props.tooltip.showing.then(|| "show"))}
            {style}
        >
            {&props.tooltip.text}
        </div>
    }
}
