//! Horizontal progress bar component.

use yew::prelude::*;

/// Properties for ProgressBar component.
#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Completion percentage, 0-100.
    pub value: u32,
}

/// Horizontal progress bar component.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress-bar">
            <div
                class="progress-bar-fill"
                style={format!("width: {}%", props.value)}
            />
        </div>
    }
}
