// Recipe calculator state: the selected machine and its input/output slots.
// The machine and resource tables are a stand-in for the real game database.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MachineSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub inputs: usize,
    pub outputs: usize,
    /// Power draw in MW (= MJ/second).
    pub cost: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub sink: u32,
    pub energy: u32,
}

pub const MACHINES: &[MachineSpec] = &[
    MachineSpec {
        id: "constructor",
        name: "Constructor",
        inputs: 1,
        outputs: 1,
        cost: 4,
    },
    MachineSpec {
        id: "assembler",
        name: "Assembler",
        inputs: 2,
        outputs: 1,
        cost: 15,
    },
];

pub const RESOURCES: &[ResourceSpec] = &[
    ResourceSpec {
        id: "FlowerPetals",
        name: "Flower Petals",
        sink: 10,
        energy: 100,
    },
    ResourceSpec {
        id: "Leaves",
        name: "Leaves",
        sink: 3,
        energy: 15,
    },
    ResourceSpec {
        id: "GenericBioMass",
        name: "Biomass",
        sink: 12,
        energy: 180,
    },
];

pub fn machine(id: &str) -> Option<&'static MachineSpec> {
    MACHINES.iter().find(|m| m.id == id)
}

pub fn resource(id: &str) -> Option<&'static ResourceSpec> {
    RESOURCES.iter().find(|r| r.id == id)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    pub resource: String,
    pub qty: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub sink: u64,
    pub energy: u64,
}

impl Totals {
    pub fn label(&self) -> String {
        if self.energy > 0 {
            format!("{} sink value, {} MJ", self.sink, self.energy)
        } else {
            format!("{} sink value", self.sink)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDraft {
    pub machine: &'static MachineSpec,
    pub inputs: Vec<Slot>,
    pub outputs: Vec<Slot>,
}

impl RecipeDraft {
    pub fn for_machine(machine: &'static MachineSpec) -> Self {
        let blank = |n: usize| {
            (0..n)
                .map(|_| Slot {
                    resource: RESOURCES[0].id.to_string(),
                    qty: 1,
                })
                .collect()
        };
        Self {
            machine,
            inputs: blank(machine.inputs),
            outputs: blank(machine.outputs),
        }
    }

    /// Switching machines resizes both sides back to defaults.
    pub fn select_machine(&mut self, id: &str) {
        if let Some(m) = machine(id) {
            *self = Self::for_machine(m);
        }
    }

    /// Sink value and energy across one side; slots naming an unknown
    /// resource are skipped rather than poisoning the totals.
    pub fn totals(slots: &[Slot]) -> Totals {
        let mut totals = Totals::default();
        for slot in slots {
            let Some(res) = resource(&slot.resource) else {
                continue;
            };
            totals.sink += u64::from(res.sink) * u64::from(slot.qty);
            totals.energy += u64::from(res.energy) * u64::from(slot.qty);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_across_slots() {
        let slots = vec![
            Slot {
                resource: "FlowerPetals".to_string(),
                qty: 2,
            },
            Slot {
                resource: "Leaves".to_string(),
                qty: 3,
            },
        ];
        let t = RecipeDraft::totals(&slots);
        assert_eq!(t.sink, 2 * 10 + 3 * 3);
        assert_eq!(t.energy, 2 * 100 + 3 * 15);
        assert_eq!(t.label(), "29 sink value, 245 MJ");
    }

    #[test]
    fn zero_energy_totals_omit_the_mj_clause() {
        let t = Totals { sink: 7, energy: 0 };
        assert_eq!(t.label(), "7 sink value");
    }

    #[test]
    fn unknown_resources_are_skipped() {
        let slots = vec![Slot {
            resource: "Unobtainium".to_string(),
            qty: 9,
        }];
        assert_eq!(RecipeDraft::totals(&slots), Totals::default());
    }

    #[test]
    fn machine_switch_resizes_slots() {
        let mut draft = RecipeDraft::for_machine(&MACHINES[0]);
        assert_eq!(draft.inputs.len(), 1);
        draft.select_machine("assembler");
        assert_eq!(draft.machine.id, "assembler");
        assert_eq!(draft.inputs.len(), 2);
        assert_eq!(draft.outputs.len(), 1);
        // Unknown ids leave the draft alone.
        draft.select_machine("refinery");
        assert_eq!(draft.machine.id, "assembler");
    }
}
