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

//! Page coordinator.
//!
//! Owns the "which section is in view" state. Each section reports itself
//! through `on_in_view`; the page highlights that section and the matching
//! navigation link.

use landing_types::Section;
use yew::prelude::*;

use crate::analytics::record_section_view;
use crate::components::form_section::FormSection;
use crate::components::hero_section::HeroSection;
use crate::constants::highlight_active_section;

#[derive(Properties, Debug, PartialEq)]
pub struct NavBarProps {
    pub active: Option<Section>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="landing-nav sticky top-0 z-10 flex gap-[24px] bg-white px-[16px] py-[12px]">
            { for Section::ALL.iter().map(|section| {
                let class = classes!(
                    "nav-link",
                    (props.active == Some(*section)).then_some("nav-link--active")
                );
                html! {
                    <a href={section.anchor()} {class}>{ section.nav_label() }</a>
                }
            }) }
        </nav>
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let active = use_state_eq(|| None::<Section>);
    let highlight = use_memo((), |_| highlight_active_section());

    let on_in_view = {
        let active = active.clone();
        use_callback((), move |section: Section, _| {
            active.set(Some(section));
            record_section_view(section);
        })
    };

    let is_active = |section: Section| *highlight && *active == Some(section);

    html! {
        <>
            <NavBar active={*active} />
            <main>
                <HeroSection
                    is_active={is_active(Section::HeroSection)}
                    on_in_view={on_in_view.clone()}
                />
                <FormSection
                    is_active={is_active(Section::FormSection)}
                    {on_in_view}
                />
            </main>
        </>
    }
}
