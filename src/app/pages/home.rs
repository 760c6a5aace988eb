//! The single portfolio page.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::sections::{About, Contact, Education, Experience, Hero, Projects, Skills};

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            Hero {}
            About {}
            Experience {}
            Projects {}
            Skills {}
            Education {}
            Contact {}
        }
    }
}
