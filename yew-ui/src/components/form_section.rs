/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! "Fill in the form" section of the landing page.
//!
//! Renders the message/email/consent form from a [`FormStore`] snapshot and
//! reports itself to the page when at least 80% of it is on screen. Submit
//! is intercepted and goes nowhere; there is no backend behind this form
//! yet.

use landing_form::{FormState, FormStore};
use landing_types::{Callback as SinkCallback, Section};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::{BtnVariant, Button};
use crate::components::container::Container;
use crate::hooks::use_section_visibility;

pub const FORM_TITLE: &str = "Заполните форму";
pub const MESSAGE_PLACEHOLDER: &str = "Напишите свой вопрос";
pub const EMAIL_PLACEHOLDER: &str = "Введите e-mail";
pub const SUBMIT_TEXT: &str = "Отправить";
pub const PRIVACY_CHECKBOX_ID: &str = "privacyPolicy";

const SECTION_CLASS: &str =
    "form-section bg-gray3 pb-[26px] pt-[81px] md:pb-[46px] md:pt-[53px] lg:pb-[220px] lg:pt-[130px]";
const ACTIVE_CLASS: &str = "border-2 border-orange";
const CHECKBOX_BASE_CLASS: &str = "privacy-checkbox flex h-[14px] min-w-[14px] cursor-pointer items-center justify-center rounded-[4px] border-[1px] border-gray1 transition";
const CHECKBOX_ON_CLASS: &str = "checked border-orange bg-orange bg-checkBox bg-center";

#[derive(Properties, Debug, PartialEq)]
pub struct FormSectionProps {
    /// Draw the highlight border (this is the section currently in view).
    #[prop_or_default]
    pub is_active: bool,
    /// Called with [`Section::FormSection`] each time the section scrolls
    /// into view.
    #[prop_or_default]
    pub on_in_view: Callback<Section>,
}

#[function_component(FormSection)]
pub fn form_section(props: &FormSectionProps) -> Html {
    let store = use_memo((), |_| FormStore::new());
    let snapshot = use_state(|| store.state());

    // Re-render from the store; released on unmount.
    {
        let store = store.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let subscription = store.watch(SinkCallback::from(move |state: FormState| {
                snapshot.set(state)
            }));
            move || drop(subscription)
        });
    }

    let section_ref = use_section_visibility(Section::FormSection, props.on_in_view.clone());

    let on_message = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            store.set_message(textarea.value());
        })
    };

    let on_email = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.set_email(input.value());
        })
    };

    let on_check = {
        let store = store.clone();
        Callback::from(move |_: Event| store.toggle_checked())
    };

    let on_submit = {
        let store = store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            store.submit();
        })
    };

    let state = &*snapshot;
    let section_class = classes!(SECTION_CLASS, props.is_active.then_some(ACTIVE_CLASS));
    let checkbox_class = classes!(
        CHECKBOX_BASE_CLASS,
        if state.is_checked {
            CHECKBOX_ON_CLASS
        } else {
            "bg-transparent"
        }
    );

    html! {
        <section ref={section_ref} id={Section::FormSection.as_id()} class={section_class}>
            <Container>
                <form class="flex flex-col gap-[35px] lg:gap-[60px]" onsubmit={on_submit}>
                    <h2 class="title_2">{ FORM_TITLE }</h2>
                    <div class="flex flex-col gap-[35px] lg:flex-row">
                        <textarea
                            class="form-message min-h-[223px] resize-none rounded-lg border-[1px] border-gray1 bg-transparent p-[17px] text-[14px] leading-[18px] placeholder-black transition-all duration-300 focus:border-black focus:outline-none lg:w-[61%] lg:text-[18px] lg:leading-[22px]"
                            value={state.message.clone()}
                            oninput={on_message}
                            placeholder={MESSAGE_PLACEHOLDER}
                        />
                        <div class="flex flex-col gap-[35px] lg:mt-[10px]">
                            <div class="relative w-full">
                                <input
                                    class="form-email w-full border-b-[1px] border-b-gray1 bg-transparent pb-[14px] text-[14px] leading-[20px] placeholder-black transition focus:border-b-black focus:outline-none lg:text-[18px] lg:leading-[22px]"
                                    type="text"
                                    value={state.email.clone()}
                                    oninput={on_email}
                                    placeholder={EMAIL_PLACEHOLDER}
                                />
                                if let Some(error) = &state.email_error {
                                    <p class="error absolute left-0 top-[38px] text-error">{ error }</p>
                                }
                            </div>
                            <div class="flex gap-[8px]">
                                <input
                                    type="checkbox"
                                    id={PRIVACY_CHECKBOX_ID}
                                    class="hidden"
                                    checked={state.is_checked}
                                    onchange={on_check}
                                />
                                <label for={PRIVACY_CHECKBOX_ID} class={checkbox_class}></label>
                                <span class="mt-[-3px] pr-[3px] text-[14px]">
                                    { "Я ознакомлен(а) с " }
                                    <span class="underline underline-offset-[3px]">{ "политикой конфиденциальности" }</span>
                                    { " и согласен(на) на обработку " }
                                    <span class="underline underline-offset-[3px]">{ "персональных данных." }</span>
                                </span>
                            </div>
                            <Button
                                disabled={state.is_submit_disabled()}
                                submit=true
                                text={SUBMIT_TEXT}
                                variant={BtnVariant::Black}
                                styles={classes!("mt-[-7px]", "md:mt-[29px]", "lg:mt-[13px]")}
                            />
                        </div>
                    </div>
                </form>
            </Container>
        </section>
    }
}
