//! The tuning parameters and their query-string wire form.
//!
//! Pure: no DOM types here. The web layer owns reading `location.search`
//! and applying a decoded update to the handles.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SliderId {
    Carve,
    Stance,
    Aggressive,
    Dynamic,
    Roll,
    Yaw,
}

#[derive(Debug)]
pub struct SliderSpec {
    pub id: SliderId,
    /// Query-string key.
    pub key: &'static str,
    /// Selector of the draggable handle element.
    pub handle_selector: &'static str,
    pub min_value: i32,
    pub max_value: i32,
}

/// The six sliders of the panel. Declaration order matches `SliderId`
/// discriminants; `spec()` relies on it.
pub static SLIDERS: [SliderSpec; 6] = [
    SliderSpec {
        id: SliderId::Carve,
        key: "carve",
        handle_selector: ".carve-handle",
        min_value: -5,
        max_value: 5,
    },
    SliderSpec {
        id: SliderId::Stance,
        key: "stance",
        handle_selector: ".pivot-handle",
        min_value: -10,
        max_value: 10,
    },
    SliderSpec {
        id: SliderId::Aggressive,
        key: "aggressive",
        handle_selector: ".triangle-handle",
        min_value: 0,
        max_value: 13,
    },
    SliderSpec {
        id: SliderId::Dynamic,
        key: "dynamic",
        handle_selector: ".dynamic-handle",
        min_value: -5,
        max_value: 5,
    },
    SliderSpec {
        id: SliderId::Roll,
        key: "roll",
        handle_selector: ".roll-handle",
        min_value: -5,
        max_value: 5,
    },
    SliderSpec {
        id: SliderId::Yaw,
        key: "yaw",
        handle_selector: ".yaw-handle",
        min_value: -5,
        max_value: 5,
    },
];

#[inline]
pub fn spec(id: SliderId) -> &'static SliderSpec {
    &SLIDERS[id as usize]
}

/// Zone engagement mode, a single exclusive choice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Zone {
    #[default]
    Dual,
    Single,
}

pub const ZONE_KEY: &str = "zone";

impl Zone {
    pub fn as_token(self) -> &'static str {
        match self {
            Zone::Dual => "dual-zone",
            Zone::Single => "single-zone",
        }
    }

    /// Tokens outside the two known literals decode to `None` and the
    /// caller keeps its current selection.
    pub fn from_token(token: &str) -> Option<Zone> {
        match token {
            "dual-zone" => Some(Zone::Dual),
            "single-zone" => Some(Zone::Single),
            _ => None,
        }
    }
}

/// The complete displayed state, rebuilt on demand for sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub values: Vec<(SliderId, i32)>,
    pub zone: Zone,
}

/// Partial state decoded from a URL; sliders without a key are absent and
/// keep their current position.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Update {
    pub values: Vec<(SliderId, i32)>,
    pub zone: Option<Zone>,
}

impl Update {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.zone.is_none()
    }
}

/// One `key=value` pair per slider plus the zone token, in table order.
pub fn serialize(snapshot: &Snapshot) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(snapshot.values.len() + 1);
    for (id, value) in &snapshot.values {
        parts.push(format!("{}={}", spec(*id).key, value));
    }
    parts.push(format!("{}={}", ZONE_KEY, snapshot.zone.as_token()));
    parts.join("&")
}

/// Decode a query string, with or without the leading `?`.
///
/// Unknown keys, non-numeric slider values, and out-of-vocabulary zone
/// tokens are ignored. Numeric values are taken as-is, even out of range;
/// they clamp visually when applied.
pub fn deserialize(query: &str) -> Update {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut update = Update::default();
    for pair in query.split('&') {
        let (key, raw) = match pair.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };
        if key == ZONE_KEY {
            if let Some(zone) = Zone::from_token(raw) {
                update.zone = Some(zone);
            }
            continue;
        }
        if let Some(spec) = SLIDERS.iter().find(|s| s.key == key) {
            if let Ok(value) = raw.parse::<i32>() {
                update.values.push((spec.id, value));
            }
        }
    }
    update
}
