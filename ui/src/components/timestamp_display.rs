use jiff::{Timestamp, tz};
use yew::prelude::*;

/// Renders a timestamp in the viewer's local timezone. All stored times
/// are instants; localization happens only at display.
#[derive(Properties, PartialEq)]
pub struct TimestampDisplayProps {
    pub timestamp: Timestamp,
}

#[function_component]
pub fn TimestampDisplay(props: &TimestampDisplayProps) -> Html {
    let zoned = props.timestamp.to_zoned(tz::TimeZone::system());
    let formatted = zoned.strftime("%a, %d %b %Y %H:%M").to_string();

    html! {
        <span>{formatted}</span>
    }
}
