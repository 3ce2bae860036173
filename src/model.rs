//! Data model for the savefile monitor: the wire types pushed by the parser
//! server, the outbound command messages, and the retained `Dashboard` that
//! merges partial updates so each section only changes when its field arrives.

use crate::state::PanelRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use yew::Reducible;

/// One partial snapshot from the parser server. Every field is optional;
/// presence of a field is the instruction to re-render that section.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub parsing: bool,
    #[serde(default)]
    pub menu: Option<Vec<(String, String)>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub cot: Option<CotReport>,
    #[serde(default)]
    pub monuments: Option<Vec<Monument>>,
    #[serde(default)]
    pub favors: Option<Favors>,
    #[serde(default)]
    pub wars: Option<Vec<War>>,
    #[serde(default)]
    pub highlight: Option<Highlight>,
    #[serde(default)]
    pub buildings_available: Option<BTreeMap<String, Building>>,
}

impl Update {
    pub fn from_error(msg: impl Into<String>) -> Self {
        Self {
            error: Some(msg.into()),
            ..Self::default()
        }
    }

    /// Does this update carry any country-report data? Used to leave the
    /// nation-pick menu when the server starts streaming a report.
    fn has_report_fields(&self) -> bool {
        self.name.is_some()
            || self.tag.is_some()
            || self.cot.is_some()
            || self.monuments.is_some()
            || self.favors.is_some()
            || self.wars.is_some()
            || self.highlight.is_some()
            || self.buildings_available.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CotReport {
    pub level3: u32,
    pub max: u32,
    #[serde(default)]
    pub upgradeable: Vec<Cot>,
    #[serde(default)]
    pub developable: Vec<Cot>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Cot {
    pub id: u32,
    pub name: String,
    pub level: u32,
    pub dev: u32,
    /// Empty when the center could upgrade right now; otherwise the blocker.
    #[serde(default)]
    pub noupgrade: String,
}

/// Monument rows arrive as six-element arrays:
/// `[sort, province_id, tier, name, project, upgrading]`.
pub type Monument = Vec<Value>;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Favors {
    /// One row per favor action; column 1 is `"---"` when off cooldown and
    /// column 4 carries the cap for the matching resource.
    #[serde(default)]
    pub cooldowns: Vec<Vec<String>>,
    /// Country -> `[favors, ducats, manpower, sailors]`.
    #[serde(default)]
    pub owed: HashMap<String, Vec<f64>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FavorSummary {
    pub free: usize,
    pub owing_ten: usize,
    pub total: usize,
}

/// A callable favor value against its cooldown cap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CappedValue {
    Plain(f64),
    Capped { shown: f64, uncapped: f64 },
}

impl Favors {
    pub fn summary(&self) -> FavorSummary {
        FavorSummary {
            free: self
                .cooldowns
                .iter()
                .filter(|cd| cd.get(1).is_some_and(|s| s == "---"))
                .count(),
            owing_ten: self
                .owed
                .values()
                .filter(|f| f.first().copied().unwrap_or(0.0) >= 10.0)
                .count(),
            total: self.owed.len(),
        }
    }

    /// Cap for owed column `col` (1 = ducats, 2 = manpower, 3 = sailors).
    /// Column 0 is the favor count itself and has no cap.
    pub fn cap_for(&self, col: usize) -> Option<f64> {
        if col == 0 {
            return None;
        }
        self.cooldowns
            .get(col - 1)?
            .get(4)?
            .parse::<f64>()
            .ok()
    }

    /// Countries sorted by favors owed, highest first (name breaks ties so
    /// the table is stable between updates).
    pub fn owed_sorted(&self) -> Vec<(&String, &Vec<f64>)> {
        let mut rows: Vec<_> = self.owed.iter().collect();
        rows.sort_by(|(an, av), (bn, bv)| {
            let a = av.first().copied().unwrap_or(0.0);
            let b = bv.first().copied().unwrap_or(0.0);
            b.total_cmp(&a).then_with(|| an.cmp(bn))
        });
        rows
    }
}

pub fn compare_capped(val: f64, cap: Option<f64>) -> CappedValue {
    match cap {
        Some(c) if val > c => CappedValue::Capped {
            shown: c,
            uncapped: val,
        },
        _ => CappedValue::Plain(val),
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct War {
    pub name: String,
    #[serde(default)]
    pub atk: bool,
    #[serde(default)]
    pub def: bool,
    #[serde(default)]
    pub cb: Option<CasusBelli>,
    #[serde(default)]
    pub armies: Vec<UnitRow>,
    #[serde(default)]
    pub navies: Vec<UnitRow>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CasusBelli {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub province: Option<u32>,
}

/// `[participant marker, cell, cell, ...]` with mixed number/string cells.
pub type UnitRow = Vec<Value>;

impl War {
    pub fn key(&self) -> String {
        war_key(&self.name, self.cb.as_ref())
    }
}

/// Stable panel key for a war. Names differing only in non-alphabetic
/// characters collapse to the same slug; a conquest-style casus belli appends
/// its target province so two "Conquest of ..." wars cannot collide.
pub fn war_key(name: &str, cb: Option<&CasusBelli>) -> String {
    let mut key = String::from("warinfo-");
    let mut gap = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() {
            if gap {
                key.push('-');
                gap = false;
            }
            key.push(ch);
        } else {
            gap = true;
        }
    }
    if gap {
        key.push('-');
    }
    if let Some(cb) = cb {
        key.push('-');
        key.push_str(&cb.kind);
        key.push('-');
        match cb.province {
            Some(p) if p != 0 => key.push_str(&p.to_string()),
            _ => key.push_str("no-province"),
        }
    }
    key
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Highlight {
    /// Id of the highlighted building, or absent when nothing is picked.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub provinces: Vec<HighlightProvince>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HighlightProvince {
    pub id: u32,
    pub name: String,
    pub buildings: u32,
    pub maxbuildings: u32,
    pub dev: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub cost: u32,
}

/// Messages sent back to the parser server.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "lowercase")]
pub enum Command {
    Goto { tag: String, province: u32 },
    Highlight { building: String },
}

// ---------------- Retained dashboard & reducer -----------------

/// Which top-level screen the monitor shows. Error beats menu beats report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    Error(&'a str),
    Menu(&'a [(String, String)]),
    Report,
}

/// The retained render state: one slot per section, replaced only when an
/// update carries that field. This is the whole "incremental renderer" —
/// the view layer is a pure function of this struct.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub error: Option<String>,
    pub parsing: bool,
    pub menu: Option<Vec<(String, String)>>,
    pub player: Option<String>,
    /// Currently monitored country, threaded into goto commands.
    pub tag: Option<String>,
    pub cot: Option<CotReport>,
    pub monuments: Option<Vec<Monument>>,
    pub favors: Option<Favors>,
    pub wars: Option<Vec<War>>,
    pub highlight: Option<Highlight>,
    pub buildings_available: Option<BTreeMap<String, Building>>,
    /// Open/closed flags for the per-war panels, keyed by `war_key`.
    pub panels: PanelRegistry,
}

#[derive(Clone, Debug)]
pub enum DashAction {
    Apply(Update),
    ToggleWar { key: String, open: bool },
}

impl Dashboard {
    pub fn screen(&self) -> Screen<'_> {
        if let Some(err) = &self.error {
            Screen::Error(err)
        } else if let Some(menu) = &self.menu {
            Screen::Menu(menu)
        } else {
            Screen::Report
        }
    }

    /// Merge one partial update. An error update suppresses everything else
    /// it carries; a menu update short-circuits the report fields; otherwise
    /// each present field replaces its slot independently.
    pub fn apply(&mut self, update: Update) {
        if let Some(err) = update.error {
            self.error = Some(err);
            return;
        }
        self.error = None;
        self.parsing = update.parsing;
        let has_report = update.has_report_fields();
        if let Some(menu) = update.menu {
            self.menu = Some(menu);
            return;
        }
        if has_report {
            self.menu = None;
        } else {
            return;
        }
        if let Some(name) = update.name {
            self.player = Some(name);
        }
        if let Some(tag) = update.tag {
            self.tag = Some(tag);
        }
        if let Some(cot) = update.cot {
            self.cot = Some(cot);
        }
        if let Some(monuments) = update.monuments {
            self.monuments = Some(monuments);
        }
        if let Some(favors) = update.favors {
            self.favors = Some(favors);
        }
        if let Some(wars) = update.wars {
            // Keep disclosure flags for wars still running; a war that ends
            // and later restarts comes back in the default open state.
            self.panels.reconcile(wars.iter().map(War::key));
            self.wars = Some(wars);
        }
        if let Some(highlight) = update.highlight {
            self.highlight = Some(highlight);
        }
        if let Some(buildings) = update.buildings_available {
            self.buildings_available = Some(buildings);
        }
    }
}

impl Reducible for Dashboard {
    type Action = DashAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            DashAction::Apply(update) => new.apply(update),
            DashAction::ToggleWar { key, open } => new.panels.set(key, open),
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn war(name: &str) -> War {
        War {
            name: name.to_string(),
            atk: true,
            def: false,
            cb: None,
            armies: Vec::new(),
            navies: Vec::new(),
        }
    }

    fn sample_update() -> Update {
        serde_json::from_value(json!({
            "name": "Sweden",
            "tag": "SWE",
            "cot": {
                "level3": 2, "max": 3,
                "upgradeable": [
                    {"id": 1, "name": "Stockholm", "level": 2, "dev": 30, "noupgrade": ""}
                ],
                "developable": []
            },
            "wars": [
                {"name": "War of A", "atk": true, "def": false,
                 "cb": null, "armies": [], "navies": []}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn applying_the_same_update_twice_is_idempotent() {
        let mut once = Dashboard::default();
        once.apply(sample_update());
        let mut twice = Dashboard::default();
        twice.apply(sample_update());
        twice.apply(sample_update());
        assert_eq!(once, twice);
    }

    #[test]
    fn absent_fields_leave_sections_untouched() {
        let mut dash = Dashboard::default();
        dash.apply(sample_update());
        let cot_before = dash.cot.clone();
        dash.apply(serde_json::from_value(json!({"monuments": [[0, 1, 2, "Pyramids", "x", "y"]]})).unwrap());
        assert_eq!(dash.cot, cot_before);
        assert_eq!(dash.player.as_deref(), Some("Sweden"));
        assert!(dash.monuments.is_some());
    }

    #[test]
    fn error_suppresses_content_and_clears_on_next_update() {
        let mut dash = Dashboard::default();
        dash.apply(sample_update());
        dash.apply(Update::from_error("boom"));
        assert_eq!(dash.screen(), Screen::Error("boom"));
        // The sections are retained underneath, just not shown.
        assert!(dash.cot.is_some());
        dash.apply(serde_json::from_value(json!({"name": "Sweden"})).unwrap());
        assert_eq!(dash.screen(), Screen::Report);
    }

    #[test]
    fn error_update_drops_its_other_fields() {
        let mut dash = Dashboard::default();
        dash.apply(serde_json::from_value(json!({"error": "boom", "name": "Sweden"})).unwrap());
        assert!(dash.player.is_none());
    }

    #[test]
    fn menu_update_short_circuits_report_fields() {
        let mut dash = Dashboard::default();
        dash.apply(
            serde_json::from_value(json!({"menu": [["SWE", "Sweden"]], "name": "ignored"}))
                .unwrap(),
        );
        assert!(matches!(dash.screen(), Screen::Menu(_)));
        assert!(dash.player.is_none());
    }

    #[test]
    fn report_data_leaves_the_menu() {
        let mut dash = Dashboard::default();
        dash.apply(serde_json::from_value(json!({"menu": [["SWE", "Sweden"]]})).unwrap());
        dash.apply(sample_update());
        assert_eq!(dash.screen(), Screen::Report);
        // An update with nothing to show (parse tick) keeps the menu up.
        let mut menu_only = Dashboard::default();
        menu_only.apply(serde_json::from_value(json!({"menu": [["SWE", "Sweden"]]})).unwrap());
        menu_only.apply(serde_json::from_value(json!({"parsing": true})).unwrap());
        assert!(matches!(menu_only.screen(), Screen::Menu(_)));
    }

    #[test]
    fn war_key_collapses_non_alphabetics() {
        assert_eq!(war_key("War of A", None), "warinfo-war-of-a");
        assert_eq!(war_key("War  of?? A", None), "warinfo-war-of-a");
        // Leading and trailing non-alphabetics leave hyphens behind.
        assert_eq!(war_key("3rd War of A!", None), "warinfo--rd-war-of-a-");
    }

    #[test]
    fn war_key_province_disambiguates() {
        let cb_x = CasusBelli {
            kind: "cb_conquest".to_string(),
            province: Some(151),
        };
        let cb_y = CasusBelli {
            kind: "cb_conquest".to_string(),
            province: Some(257),
        };
        let a = war_key("Conquest of Ile-de-France", Some(&cb_x));
        let b = war_key("Conquest of Ile-de-France", Some(&cb_y));
        assert_ne!(a, b);
        assert_eq!(a, "warinfo-conquest-of-ile-de-france-cb_conquest-151");
    }

    #[test]
    fn war_key_missing_province_falls_back() {
        let cb = CasusBelli {
            kind: "cb_superiority".to_string(),
            province: None,
        };
        assert_eq!(
            war_key("Big War", Some(&cb)),
            "warinfo-big-war-cb_superiority-no-province"
        );
    }

    #[test]
    fn closed_panel_survives_a_wars_update() {
        let mut dash = Dashboard::default();
        dash.apply(Update {
            wars: Some(vec![war("War of A")]),
            ..Update::default()
        });
        let key = war_key("War of A", None);
        assert!(dash.panels.is_open(&key));
        dash.panels.set(key.clone(), false);
        dash.apply(Update {
            wars: Some(vec![war("War of A"), war("War of B")]),
            ..Update::default()
        });
        assert!(!dash.panels.is_open(&key));
        assert!(dash.panels.is_open(&war_key("War of B", None)));
    }

    #[test]
    fn vanished_war_resets_to_default_open() {
        let mut dash = Dashboard::default();
        dash.apply(Update {
            wars: Some(vec![war("War of A")]),
            ..Update::default()
        });
        let key = war_key("War of A", None);
        dash.panels.set(key.clone(), false);
        dash.apply(Update {
            wars: Some(vec![war("War of B")]),
            ..Update::default()
        });
        dash.apply(Update {
            wars: Some(vec![war("War of A")]),
            ..Update::default()
        });
        assert!(dash.panels.is_open(&key));
    }

    #[test]
    fn favor_summary_counts() {
        let favors: Favors = serde_json::from_value(json!({
            "cooldowns": [
                ["d", "---", "a", "b", "250.0"],
                ["d", "1453.11.1", "a", "b", "10.0"],
                ["d", "---", "a", "b", "500.0"]
            ],
            "owed": {
                "France": [12.0, 100.0, 5.0, 2.0],
                "Austria": [3.0, 1.0, 1.0, 1.0]
            }
        }))
        .unwrap();
        let s = favors.summary();
        assert_eq!(s.free, 2);
        assert_eq!(s.owing_ten, 1);
        assert_eq!(s.total, 2);
    }

    #[test]
    fn favor_caps_apply_per_column() {
        let favors: Favors = serde_json::from_value(json!({
            "cooldowns": [["d", "---", "a", "b", "250.0"]],
            "owed": {}
        }))
        .unwrap();
        assert_eq!(favors.cap_for(0), None);
        assert_eq!(favors.cap_for(1), Some(250.0));
        assert_eq!(favors.cap_for(2), None);
        assert_eq!(
            compare_capped(300.0, favors.cap_for(1)),
            CappedValue::Capped {
                shown: 250.0,
                uncapped: 300.0
            }
        );
        assert_eq!(compare_capped(250.0, Some(250.0)), CappedValue::Plain(250.0));
        assert_eq!(compare_capped(300.0, None), CappedValue::Plain(300.0));
    }

    #[test]
    fn owed_rows_sort_by_favors_desc() {
        let favors: Favors = serde_json::from_value(json!({
            "cooldowns": [],
            "owed": {
                "Austria": [3.0, 0.0, 0.0, 0.0],
                "France": [12.0, 0.0, 0.0, 0.0],
                "Bohemia": [3.0, 0.0, 0.0, 0.0]
            }
        }))
        .unwrap();
        let names: Vec<&str> = favors.owed_sorted().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["France", "Austria", "Bohemia"]);
    }

    #[test]
    fn commands_serialize_to_the_wire_shape() {
        assert_eq!(
            serde_json::to_value(Command::Goto {
                tag: "SWE".to_string(),
                province: 1
            })
            .unwrap(),
            json!({"cmd": "goto", "tag": "SWE", "province": 1})
        );
        assert_eq!(
            serde_json::to_value(Command::Highlight {
                building: "shipyard".to_string()
            })
            .unwrap(),
            json!({"cmd": "highlight", "building": "shipyard"})
        );
    }

    #[test]
    fn sparse_updates_parse_and_ignore_unknown_fields() {
        let update: Update =
            serde_json::from_str(r#"{"favors": {"cooldowns": [], "owed": {}}, "someday": 1}"#)
                .unwrap();
        assert!(update.favors.is_some());
        assert!(update.wars.is_none());
        assert!(!update.parsing);
    }
}
