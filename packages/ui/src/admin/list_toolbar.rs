//! Search, sort and view controls shared by every list page.

use console_core::{Panel, SortDirection, ViewMode};
use dioxus::prelude::*;

/// Props for ListToolbar component.
#[derive(Props, Clone, PartialEq)]
pub struct ListToolbarProps {
    /// Current filter text.
    pub query: String,
    pub on_query: EventHandler<String>,
    /// Sort field labels with the active direction, if any.
    pub sort_options: Vec<(&'static str, Option<SortDirection>)>,
    /// Called with the index of the clicked sort option.
    pub on_sort: EventHandler<usize>,
    pub view: ViewMode,
    pub on_toggle_view: EventHandler<()>,
    /// Quick filter values; clicking one sets the query to it.
    #[props(default)]
    pub filter_options: Vec<String>,
    /// Fold the controls into mutually exclusive panels.
    #[props(default = false)]
    pub collapsible: bool,
    /// Expanded panel when collapsible.
    #[props(!optional, default)]
    pub open_panel: Option<Panel>,
    #[props(default)]
    pub on_panel: Option<EventHandler<Panel>>,
}

#[component]
pub fn ListToolbar(props: ListToolbarProps) -> Element {
    let collapsible = props.collapsible;
    let shows = |panel: Panel| !collapsible || props.open_panel == Some(panel);

    let show_search = shows(Panel::Search);
    let show_sort = shows(Panel::Sort);
    let show_filter = shows(Panel::Filter) && !props.filter_options.is_empty();
    let view_label = props.view.toggled().label();

    rsx! {
        div { class: "list-toolbar",
            div { class: "toolbar-row",
                if let Some(on_panel) = props.on_panel.filter(|_| collapsible) {
                    div { class: "panel-tabs",
                        for panel in Panel::ALL.iter().copied() {
                            button {
                                key: "{panel.label()}",
                                class: if props.open_panel == Some(panel) { "btn btn-small btn-active" } else { "btn btn-small" },
                                onclick: move |_| on_panel.call(panel),
                                {panel.label()}
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-small btn-secondary view-toggle",
                    onclick: move |_| props.on_toggle_view.call(()),
                    "{view_label} view"
                }
            }

            if show_search {
                div { class: "toolbar-section",
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Search...",
                        value: "{props.query}",
                        oninput: move |e| props.on_query.call(e.value()),
                    }
                }
            }

            if show_sort {
                div { class: "toolbar-section sort-options",
                    span { class: "toolbar-label", "Sort by" }
                    for (index, (label, direction)) in props.sort_options.iter().copied().enumerate() {
                        button {
                            key: "{label}",
                            class: if direction.is_some() { "btn btn-small btn-active" } else { "btn btn-small" },
                            onclick: move |_| props.on_sort.call(index),
                            "{label}"
                            if let Some(direction) = direction {
                                span { class: "sort-arrow", {direction.arrow()} }
                            }
                        }
                    }
                }
            }

            if show_filter {
                div { class: "toolbar-section filter-options",
                    span { class: "toolbar-label", "Filter" }
                    button {
                        class: if props.query.is_empty() { "chip chip-active" } else { "chip" },
                        onclick: move |_| props.on_query.call(String::new()),
                        "All"
                    }
                    for option in props.filter_options.iter().cloned() {
                        {
                            let active = option.eq_ignore_ascii_case(&props.query);
                            let value = option.clone();
                            rsx! {
                                button {
                                    key: "{option}",
                                    class: if active { "chip chip-active" } else { "chip" },
                                    onclick: move |_| props.on_query.call(value.clone()),
                                    "{option}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
