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

//! Shared call-to-action button.

use yew::prelude::*;

const BASE_CLASS: &str = "btn rounded-lg px-[40px] py-[14px] text-[16px] transition duration-300 disabled:cursor-not-allowed disabled:opacity-50";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BtnVariant {
    #[default]
    Black,
    Orange,
}

impl BtnVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BtnVariant::Black => "btn-black bg-black text-white hover:bg-orange",
            BtnVariant::Orange => "btn-orange bg-orange text-black hover:bg-black hover:text-white",
        }
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct ButtonProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    /// Render as `type="submit"` so the enclosing form handles the click.
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub variant: BtnVariant,
    /// Extra classes appended after the variant classes.
    #[prop_or_default]
    pub styles: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let kind = if props.submit { "submit" } else { "button" };
    let class = classes!(BASE_CLASS, props.variant.class(), props.styles.clone());

    html! {
        <button
            type={kind}
            {class}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.text.clone() }
        </button>
    }
}
