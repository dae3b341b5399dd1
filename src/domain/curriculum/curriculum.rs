//! Curriculum aggregate - validated, indexed, immutable authored content.
//!
//! Construction checks every authoring invariant once so the query and
//! transition code can rely on them:
//!
//! - no duplicate ids, no dangling `phase_id` / `section_id` references
//! - `order` contiguous from zero and unique within each parent scope
//! - at least one step overall
//! - under [`ContentPolicy::Strict`], no empty sections or phases
//!
//! The hierarchy is kept as an ordered tree of indices so that "the next
//! step" is a mixed-radix increment over `(phase, section, step)` positions.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::debug;

use crate::domain::foundation::{PhaseId, SectionId, StepId};

use super::{ContentPolicy, CurriculumError, Phase, Section, Step};

/// Location of a step in the ordered hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub phase: usize,
    pub section: usize,
    pub step: usize,
}

impl Position {
    /// The first slot of the first section of the first phase.
    pub const ORIGIN: Position = Position {
        phase: 0,
        section: 0,
        step: 0,
    };
}

#[derive(Debug, Clone, PartialEq)]
struct SectionNode {
    id: SectionId,
    steps: Vec<StepId>,
}

#[derive(Debug, Clone, PartialEq)]
struct PhaseNode {
    id: PhaseId,
    sections: Vec<SectionNode>,
}

/// Validated curriculum content.
#[derive(Debug, Clone, PartialEq)]
pub struct Curriculum {
    phases: HashMap<PhaseId, Phase>,
    sections: HashMap<SectionId, Section>,
    steps: HashMap<StepId, Step>,
    tree: Vec<PhaseNode>,
    positions: HashMap<StepId, Position>,
}

impl Curriculum {
    /// Builds a curriculum with the default (lenient) content policy.
    pub fn new(
        phases: Vec<Phase>,
        sections: Vec<Section>,
        steps: Vec<Step>,
    ) -> Result<Self, CurriculumError> {
        Self::with_policy(phases, sections, steps, ContentPolicy::default())
    }

    /// Builds a curriculum, validating all authoring invariants.
    pub fn with_policy(
        phases: Vec<Phase>,
        sections: Vec<Section>,
        steps: Vec<Step>,
        policy: ContentPolicy,
    ) -> Result<Self, CurriculumError> {
        let phases = index_unique("phase", phases, |p| p.id.clone())?;
        let sections = index_unique("section", sections, |s| s.id.clone())?;
        let steps = index_unique("step", steps, |s| s.id.clone())?;

        for section in sections.values() {
            if !phases.contains_key(&section.phase_id) {
                return Err(CurriculumError::DanglingReference {
                    kind: "section",
                    id: section.id.to_string(),
                    parent_kind: "phase",
                    parent_id: section.phase_id.to_string(),
                });
            }
        }
        for step in steps.values() {
            if !sections.contains_key(&step.section_id) {
                return Err(CurriculumError::DanglingReference {
                    kind: "step",
                    id: step.id.to_string(),
                    parent_kind: "section",
                    parent_id: step.section_id.to_string(),
                });
            }
        }

        let mut ordered_phases: Vec<&Phase> = phases.values().collect();
        ordered_phases.sort_by_key(|p| p.order);
        check_orders("phases".to_string(), ordered_phases.iter().map(|p| p.order))?;

        let mut sections_by_phase: HashMap<&PhaseId, Vec<&Section>> = HashMap::new();
        for section in sections.values() {
            sections_by_phase.entry(&section.phase_id).or_default().push(section);
        }
        let mut steps_by_section: HashMap<&SectionId, Vec<&Step>> = HashMap::new();
        for step in steps.values() {
            steps_by_section.entry(&step.section_id).or_default().push(step);
        }

        let mut tree = Vec::with_capacity(ordered_phases.len());
        let mut positions = HashMap::with_capacity(steps.len());

        for (phase_idx, phase) in ordered_phases.iter().enumerate() {
            let mut children = sections_by_phase.remove(&phase.id).unwrap_or_default();
            children.sort_by_key(|s| s.order);
            check_orders(
                format!("phase '{}'", phase.id),
                children.iter().map(|s| s.order),
            )?;
            if children.is_empty() && policy == ContentPolicy::Strict {
                return Err(CurriculumError::EmptyContainer {
                    kind: "phase",
                    id: phase.id.to_string(),
                });
            }

            let mut section_nodes = Vec::with_capacity(children.len());
            for (section_idx, section) in children.iter().enumerate() {
                let mut leaves = steps_by_section.remove(&section.id).unwrap_or_default();
                leaves.sort_by_key(|s| s.order);
                check_orders(
                    format!("section '{}'", section.id),
                    leaves.iter().map(|s| s.order),
                )?;
                if leaves.is_empty() && policy == ContentPolicy::Strict {
                    return Err(CurriculumError::EmptyContainer {
                        kind: "section",
                        id: section.id.to_string(),
                    });
                }

                for (step_idx, step) in leaves.iter().enumerate() {
                    positions.insert(
                        step.id.clone(),
                        Position {
                            phase: phase_idx,
                            section: section_idx,
                            step: step_idx,
                        },
                    );
                }
                section_nodes.push(SectionNode {
                    id: section.id.clone(),
                    steps: leaves.iter().map(|s| s.id.clone()).collect(),
                });
            }

            tree.push(PhaseNode {
                id: phase.id.clone(),
                sections: section_nodes,
            });
        }

        if positions.is_empty() {
            return Err(CurriculumError::NoSteps);
        }

        debug!(
            phases = phases.len(),
            sections = sections.len(),
            steps = steps.len(),
            ?policy,
            "curriculum validated"
        );

        Ok(Self {
            phases,
            sections,
            steps,
            tree,
            positions,
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Lookups
    // ───────────────────────────────────────────────────────────────

    pub fn phase(&self, id: &PhaseId) -> Option<&Phase> {
        self.phases.get(id)
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.get(id)
    }

    pub fn step(&self, id: &StepId) -> Option<&Step> {
        self.steps.get(id)
    }

    /// Number of steps in the whole curriculum.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// All phases sorted by `order`.
    pub fn phases_ordered(&self) -> Vec<&Phase> {
        self.tree
            .iter()
            .filter_map(|node| self.phases.get(&node.id))
            .collect()
    }

    /// Sections of a phase sorted by `order`; empty for unknown phases.
    pub fn sections_of(&self, phase_id: &PhaseId) -> Vec<&Section> {
        self.phase_node(phase_id)
            .map(|node| {
                node.sections
                    .iter()
                    .filter_map(|s| self.sections.get(&s.id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Steps of a section sorted by `order`; empty for unknown sections.
    pub fn steps_of(&self, section_id: &SectionId) -> Vec<&Step> {
        self.section_node(section_id)
            .map(|node| node.steps.iter().filter_map(|id| self.steps.get(id)).collect())
            .unwrap_or_default()
    }

    /// Step ids of every section in a phase, in curriculum order.
    pub fn step_ids_in_phase(&self, phase_id: &PhaseId) -> Vec<&StepId> {
        self.phase_node(phase_id)
            .map(|node| node.sections.iter().flat_map(|s| s.steps.iter()).collect())
            .unwrap_or_default()
    }

    /// Step ids of a section, in order.
    pub fn step_ids_in_section(&self, section_id: &SectionId) -> Vec<&StepId> {
        self.section_node(section_id)
            .map(|node| node.steps.iter().collect())
            .unwrap_or_default()
    }

    /// Every step id in curriculum order.
    pub fn step_ids(&self) -> impl Iterator<Item = &StepId> {
        self.tree
            .iter()
            .flat_map(|p| p.sections.iter())
            .flat_map(|s| s.steps.iter())
    }

    pub fn section_for_step(&self, step_id: &StepId) -> Option<&Section> {
        let step = self.steps.get(step_id)?;
        self.sections.get(&step.section_id)
    }

    pub fn phase_for_step(&self, step_id: &StepId) -> Option<&Phase> {
        let section = self.section_for_step(step_id)?;
        self.phases.get(&section.phase_id)
    }

    // ───────────────────────────────────────────────────────────────
    // Positional navigation
    // ───────────────────────────────────────────────────────────────

    /// Position of a step in the hierarchy.
    pub fn position(&self, step_id: &StepId) -> Option<Position> {
        self.positions.get(step_id).copied()
    }

    /// The first step of the curriculum, skipping empty containers.
    pub fn first_step(&self) -> Option<&StepId> {
        self.first_leaf_from(Position::ORIGIN)
    }

    /// The step that follows `step_id` in curriculum order.
    ///
    /// Carries from step to section to phase like a mixed-radix counter,
    /// skipping sections without steps and phases without sections.
    /// Returns `None` at the end of the curriculum or for unknown ids.
    pub fn step_after(&self, step_id: &StepId) -> Option<&StepId> {
        let at = self.position(step_id)?;
        self.first_leaf_from(Position {
            step: at.step + 1,
            ..at
        })
    }

    /// The step before `step_id` inside the same section.
    pub fn previous_in_section(&self, step_id: &StepId) -> Option<&StepId> {
        let at = self.position(step_id)?;
        let index = at.step.checked_sub(1)?;
        self.leaf_at(Position { step: index, ..at })
    }

    /// The step after `step_id` inside the same section.
    pub fn next_in_section(&self, step_id: &StepId) -> Option<&StepId> {
        let at = self.position(step_id)?;
        self.leaf_at(Position {
            step: at.step + 1,
            ..at
        })
    }

    fn leaf_at(&self, at: Position) -> Option<&StepId> {
        self.tree
            .get(at.phase)?
            .sections
            .get(at.section)?
            .steps
            .get(at.step)
    }

    fn first_leaf_from(&self, start: Position) -> Option<&StepId> {
        let Position {
            phase: mut p,
            section: mut s,
            step: mut k,
        } = start;

        loop {
            let phase = self.tree.get(p)?;
            match phase.sections.get(s) {
                None => {
                    p += 1;
                    s = 0;
                    k = 0;
                }
                Some(section) => match section.steps.get(k) {
                    Some(id) => return Some(id),
                    None => {
                        s += 1;
                        k = 0;
                    }
                },
            }
        }
    }

    fn phase_node(&self, id: &PhaseId) -> Option<&PhaseNode> {
        self.tree.iter().find(|node| &node.id == id)
    }

    fn section_node(&self, id: &SectionId) -> Option<&SectionNode> {
        let phase_id = &self.sections.get(id)?.phase_id;
        self.phase_node(phase_id)?
            .sections
            .iter()
            .find(|node| &node.id == id)
    }
}

fn index_unique<K, V>(
    kind: &'static str,
    items: Vec<V>,
    key: impl Fn(&V) -> K,
) -> Result<HashMap<K, V>, CurriculumError>
where
    K: Eq + Hash + std::fmt::Display,
{
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let k = key(&item);
        if map.contains_key(&k) {
            return Err(CurriculumError::DuplicateId {
                kind,
                id: k.to_string(),
            });
        }
        map.insert(k, item);
    }
    Ok(map)
}

/// Checks that already-sorted orders are exactly `0, 1, 2, ...`.
fn check_orders(
    scope: String,
    sorted_orders: impl Iterator<Item = u32>,
) -> Result<(), CurriculumError> {
    let mut seen = HashSet::new();
    for (index, order) in sorted_orders.enumerate() {
        if !seen.insert(order) {
            return Err(CurriculumError::DuplicateOrder { scope, order });
        }
        let expected = index as u32;
        if order != expected {
            return Err(CurriculumError::OrderGap {
                scope,
                expected,
                found: order,
            });
        }
    }
    Ok(())
}
