//! Home page component: the doctor directory

use dioxus::prelude::*;
use directory::{categories, DirectoryStats, FilterCriteria, LoadState, ResultSummary};

use crate::components::{DoctorCard, DoctorCardSkeleton, UnavailableNotice};
use crate::state::use_directory;

/// Directory page - searchable, filterable list of doctors
#[component]
pub fn Directory() -> Element {
    let directory = use_directory();
    let mut criteria = use_signal(FilterCriteria::default);

    let snapshot = use_memo(move || directory.state().snapshot().cloned());

    // Derived from the snapshot, recomputed when it changes
    let specialties = use_memo(move || snapshot().map(|s| categories(&s)).unwrap_or_default());
    let stats = use_memo(move || snapshot().map(|s| DirectoryStats::from_snapshot(&s)).unwrap_or_default());

    let filtered = use_memo(move || {
        snapshot()
            .map(|s| criteria.read().apply(&s))
            .unwrap_or_default()
    });

    let state = directory.state();
    let query = criteria.read().query.clone();
    let filters_active = criteria.read().is_active();
    let headline = ResultSummary::new(filtered().len()).headline();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            // Hero Section
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12",
                    div {
                        class: "text-center max-w-3xl mx-auto",
                        h1 {
                            class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                            "Find Your Perfect"
                            span { class: "text-blue-600", " Healthcare Provider" }
                        }
                        p {
                            class: "text-lg sm:text-xl text-gray-600 mb-8",
                            "Connect with qualified doctors and book appointments instantly. Your health journey starts here."
                        }

                        // Search Bar
                        div {
                            class: "relative max-w-xl mx-auto mb-6",
                            div {
                                class: "absolute inset-y-0 left-0 pl-4 flex items-center pointer-events-none",
                                svg {
                                    class: "h-5 w-5 text-gray-400",
                                    fill: "none",
                                    stroke: "currentColor",
                                    view_box: "0 0 24 24",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        stroke_width: "2",
                                        d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                                    }
                                }
                            }
                            input {
                                r#type: "text",
                                placeholder: "Search by doctor name, specialty, or hospital...",
                                value: "{query}",
                                oninput: move |e| criteria.write().query = e.value(),
                                class: "w-full pl-12 pr-4 py-3.5 bg-gray-50 border border-gray-200 rounded-xl text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all"
                            }
                            if !query.is_empty() {
                                button {
                                    class: "absolute inset-y-0 right-0 pr-4 flex items-center text-gray-400 hover:text-gray-600",
                                    onclick: move |_| criteria.write().clear(),
                                    "\u{2715}"
                                }
                            }
                        }

                        // Quick Stats
                        div {
                            class: "flex justify-center gap-8 text-center",
                            StatItem { value: format!("{}+", stats().doctors), label: "Qualified Doctors" }
                            StatItem { value: format!("{}+", stats().specialties), label: "Specialties" }
                            StatItem { value: "24/7", label: "Support" }
                        }
                    }
                }
            }

            // Specialty Filters
            div {
                class: "bg-white border-b border-gray-100 sticky top-0 z-10",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-3",
                    h3 { class: "text-sm font-medium text-gray-500 mb-2", "Filter by Specialty" }
                    div {
                        class: "flex items-center gap-1 overflow-x-auto",
                        SpecialtyChip {
                            label: "All Specialties",
                            active: criteria.read().is_selected(""),
                            onselect: move |_| criteria.write().select_category(""),
                        }
                        for specialty in specialties() {
                            SpecialtyChip {
                                key: "{specialty}",
                                label: specialty.clone(),
                                active: criteria.read().is_selected(&specialty),
                                onselect: move |_| criteria.write().select_category(&specialty),
                            }
                        }
                    }
                }
            }

            // Results
            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

                {match state {
                    LoadState::Loading => rsx! {
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for i in 0..6 {
                                DoctorCardSkeleton { key: "{i}" }
                            }
                        }
                    },
                    LoadState::Failed(message) => rsx! {
                        UnavailableNotice { message }
                    },
                    LoadState::Loaded(_) => rsx! {
                        div {
                            class: "flex items-center justify-between mb-6",
                            h2 {
                                class: "text-2xl font-semibold text-gray-900",
                                "{headline}"
                            }
                            if filters_active {
                                button {
                                    class: "text-sm text-blue-600 hover:text-blue-700 font-medium",
                                    onclick: move |_| criteria.write().clear(),
                                    "Clear All Filters"
                                }
                            }
                        }

                        if filtered().is_empty() {
                            div {
                                class: "text-center py-16",
                                div {
                                    class: "inline-flex items-center justify-center w-20 h-20 rounded-full bg-gray-100 mb-6 text-4xl",
                                    "\u{1F468}\u{200D}\u{2695}\u{FE0F}"
                                }
                                h3 { class: "text-lg font-medium text-gray-900 mb-2", "No doctors found" }
                                p {
                                    class: "text-gray-500 mb-6",
                                    "Try adjusting your search criteria or browse all available doctors."
                                }
                                button {
                                    class: "px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors",
                                    onclick: move |_| criteria.write().clear(),
                                    "Browse All Doctors"
                                }
                            }
                        } else {
                            div {
                                class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                                for provider in filtered() {
                                    DoctorCard { key: "{provider.id}", provider }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn StatItem(value: String, label: String) -> Element {
    rsx! {
        div {
            span { class: "block text-2xl font-bold text-blue-600", "{value}" }
            span { class: "block text-sm text-gray-500", "{label}" }
        }
    }
}

#[component]
fn SpecialtyChip(label: String, active: bool, onselect: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if active {
                "px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap transition-all bg-blue-100 text-blue-700"
            } else {
                "px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap transition-all bg-gray-50 text-gray-600 hover:bg-gray-100"
            },
            onclick: move |_| onselect.call(()),
            "{label}"
        }
    }
}
