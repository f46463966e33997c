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

use landing_types::Section;
use yew::prelude::*;

use crate::components::button::{BtnVariant, Button};
use crate::components::container::Container;
use crate::hooks::use_section_visibility;

const SECTION_CLASS: &str = "hero-section bg-white pb-[60px] pt-[120px] lg:pb-[140px] lg:pt-[180px]";

#[derive(Properties, Debug, PartialEq)]
pub struct HeroSectionProps {
    #[prop_or_default]
    pub is_active: bool,
    #[prop_or_default]
    pub on_in_view: Callback<Section>,
}

/// Opening banner with a shortcut down to the contact form.
#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let section_ref = use_section_visibility(Section::HeroSection, props.on_in_view.clone());

    let go_to_form = Callback::from(|_: MouseEvent| {
        if let Some(element) = gloo_utils::document().get_element_by_id(Section::FormSection.as_id()) {
            element.scroll_into_view();
        }
    });

    let class = classes!(SECTION_CLASS, props.is_active.then_some("border-2 border-orange"));

    html! {
        <section ref={section_ref} id={Section::HeroSection.as_id()} {class}>
            <Container>
                <h1 class="title_1">{ "Ответим на любой вопрос" }</h1>
                <Button
                    text="Задать вопрос"
                    variant={BtnVariant::Orange}
                    styles={classes!("mt-[40px]")}
                    onclick={go_to_form}
                />
            </Container>
        </section>
    }
}
