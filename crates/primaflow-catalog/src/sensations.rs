use std::sync::LazyLock;

use crate::Sensation;

pub(crate) fn table() -> &'static [Sensation] {
    static SENSATIONS: LazyLock<Vec<Sensation>> = LazyLock::new(|| {
        [
            ("sharp", "Sharp or Stabbing"),
            ("dull-ache", "Dull Ache"),
            ("burning", "Burning"),
            ("tingling", "Tingling or Pins and Needles"),
            ("numbness", "Numbness"),
            ("stiffness", "Stiffness"),
            ("throbbing", "Throbbing"),
            ("radiating", "Radiating"),
        ]
        .iter()
        .map(|&(id, name)| Sensation { id, name })
        .collect()
    });
    &SENSATIONS
}
