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

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub children: Children,
}

/// Centered, width-limited layout wrapper shared by every section.
#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class="container mx-auto max-w-[1440px] px-[16px] md:px-[40px] lg:px-[80px]">
            { for props.children.iter() }
        </div>
    }
}
