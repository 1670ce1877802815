use dioxus::prelude::*;

use crate::components::icon::{Icon, LucideIcon};

const COLORS: [&str; 6] = [
    "bg-sky-500",
    "bg-violet-500",
    "bg-pink-600",
    "bg-orange-600",
    "bg-green-600",
    "bg-gray-500",
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

fn color_for(initials: &str) -> &'static str {
    let idx = initials
        .chars()
        .fold(0, |pv, cv| (pv + cv as usize) % COLORS.len());

    COLORS[idx]
}

/// Round badge with the user's initials, or the generic user icon when the
/// name has nothing to abbreviate.
#[component]
pub fn Avatar(name: String) -> Element {
    let initials = initials(&name);

    if initials.is_empty() {
        return rsx! {
            div {
                class: "bg-sky-500/10 p-1 rounded-full",
                LucideIcon { icon: Icon::User, class: "h-5 w-5 text-sky-600" }
            }
        };
    }

    let color = color_for(&initials);

    rsx! {
        div {
            class: "{color} w-8 h-8 text-sm rounded-full flex items-center justify-center font-semibold text-white",
            title: "{name}",
            "{initials}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_letter_of_first_two_words() {
        assert_eq!(initials("ana maria driver"), "AM");
        assert_eq!(initials("Bo"), "B");
    }

    #[test]
    fn skips_punctuation_and_empty_names() {
        assert_eq!(initials("ana@example.com"), "A");
        assert_eq!(initials("(  )"), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn color_is_stable_for_same_initials() {
        assert_eq!(color_for("AD"), color_for("AD"));
        assert!(COLORS.contains(&color_for("ZZ")));
    }
}
