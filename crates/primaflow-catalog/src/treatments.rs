use std::sync::LazyLock;

use crate::Treatment;

pub(crate) fn table() -> &'static [Treatment] {
    static TREATMENTS: LazyLock<Vec<Treatment>> = LazyLock::new(|| {
        [
            ("physical-therapy", "Physical Therapy"),
            ("chiropractic", "Chiropractic Care"),
            ("cortisone-injections", "Cortisone Injections"),
            ("pain-medication", "Pain Medication"),
            ("surgery", "Surgery"),
            ("acupuncture", "Acupuncture"),
            ("massage-therapy", "Massage Therapy"),
            ("none", "No Previous Treatment"),
        ]
        .iter()
        .map(|&(id, name)| Treatment { id, name })
        .collect()
    });
    &TREATMENTS
}
