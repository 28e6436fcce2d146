//! Book appointment page component

use dioxus::prelude::*;
use directory::{
    BookingCommand, BookingEvent, BookingField, BookingMachine, BookingState, Destination,
    RouteContext,
};
use tracing::debug;

use crate::components::{LoadingSpinner, NotFoundNotice, UnavailableNotice};
use crate::config::config;
use crate::platform::{alert, pause};
use crate::route_context::{use_route_context, DioxusRoute};
use crate::routes::Route;
use crate::state::use_directory;

/// Booking page - collect patient details and confirm
#[component]
pub fn BookAppointment(id: String) -> Element {
    let route = use_route_context();
    let directory = use_directory();

    let machine = use_signal(|| {
        debug!(%id, "Opening booking form");
        BookingMachine::from_route(&route, config().confirmation_delay())
    });
    let notice = use_signal(|| None::<String>);

    // Hand the settled load to the machine
    {
        let route = route.clone();
        use_effect(move || {
            let load = directory.state();
            if !load.is_loading() {
                dispatch(machine, notice, route.clone(), BookingEvent::Loaded(load));
            }
        });
    }

    let state = machine.read().state().clone();

    match state {
        BookingState::Loading { .. } => rsx! {
            LoadingSpinner { message: "Loading doctor information..." }
        },
        BookingState::NotFound => rsx! { NotFoundNotice {} },
        BookingState::Unavailable { message } => rsx! { UnavailableNotice { message } },
        BookingState::Ready { provider, draft }
        | BookingState::Submitting { provider, draft }
        | BookingState::Submitted { provider, draft } => {
            let submitted = machine.read().state().is_submitted();
            let when = draft.display_date();
            let profile: Route = Destination::Profile(provider.id).into();
            let on_submit = {
                let route = route.clone();
                move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch(machine, notice, route.clone(), BookingEvent::Submit);
                }
            };

            rsx! {
                div {
                    class: "max-w-xl mx-auto p-6",

                    div {
                        class: "mb-4",
                        Link {
                            to: profile,
                            class: "text-blue-600 hover:text-blue-700 text-sm inline-block",
                            "\u{2190} Back to Profile"
                        }
                    }

                    h2 {
                        class: "text-2xl font-semibold mb-2 text-center text-gray-900",
                        "Book Appointment with Dr. {provider.name}"
                    }
                    p {
                        class: "text-center text-gray-600 mb-6",
                        "{provider.speciality} at {provider.hospital}"
                    }

                    if let Some(text) = notice() {
                        if !submitted {
                            div {
                                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-6 whitespace-pre-line",
                                "{text}"
                            }
                        }
                    }

                    if submitted {
                        div {
                            class: "bg-green-50 border border-green-200 text-green-700 p-4 rounded-lg mb-6 text-center",
                            p { class: "font-semibold", "Appointment request received!" }
                            p { class: "text-sm", "{draft.name}, we're confirming your visit on {when}..." }
                        }
                    }

                    form {
                        class: "bg-white border border-gray-200 shadow-sm rounded-xl p-6 space-y-4",
                        onsubmit: on_submit,

                        for field in BookingField::ALL {
                            FormField {
                                key: "{field.key()}",
                                field,
                                value: draft.get(field).to_string(),
                                disabled: submitted,
                                onchange: {
                                    let route = route.clone();
                                    move |value: String| {
                                        dispatch(machine, notice, route.clone(), BookingEvent::edit(field, value));
                                    }
                                },
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50",
                            disabled: submitted,
                            if submitted { "Confirming..." } else { "Confirm Appointment" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(field: BookingField, value: String, disabled: bool, onchange: EventHandler<String>) -> Element {
    let (input_type, placeholder) = match field {
        BookingField::Name => ("text", "Enter your name"),
        BookingField::Age => ("number", "Enter your age"),
        BookingField::Date => ("date", ""),
    };

    rsx! {
        div {
            label {
                class: "block mb-1 font-medium text-gray-700",
                r#for: "{field.key()}",
                "{field.label()}"
                span { class: "text-red-500 ml-0.5", "*" }
            }
            input {
                id: "{field.key()}",
                name: "{field.key()}",
                r#type: input_type,
                value: "{value}",
                placeholder,
                disabled,
                aria_required: "true",
                oninput: move |e| onchange.call(e.value()),
                class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
            }
        }
    }
}

/// Feed one event to the machine and carry out the command it returns.
fn dispatch(
    mut machine: Signal<BookingMachine>,
    mut notice: Signal<Option<String>>,
    route: DioxusRoute,
    event: BookingEvent,
) {
    let command = machine.write().decide(&event);

    match command {
        Some(BookingCommand::Prompt(text)) => {
            alert(&text);
            notice.set(Some(text));
        }
        Some(BookingCommand::ScheduleConfirmation(delay)) => {
            notice.set(None);
            spawn(async move {
                pause(delay).await;
                dispatch(machine, notice, route, BookingEvent::DelayElapsed);
            });
        }
        Some(BookingCommand::Navigate(to)) => route.navigate(to),
        None => {}
    }
}
