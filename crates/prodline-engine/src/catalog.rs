//! Task template catalog.
//!
//! Reusable task blueprints grouped by factory track. Ordering within a
//! track is significant: it encodes the real production sequence
//! (design → sourcing → prototyping → quality check → mass production →
//! final inspection). The catalog is pure and stateless after
//! construction; a malformed template is a programming error and fails
//! construction, unlike runtime date input which is handled leniently.

use prodline_core::{FactoryType, Priority, Role, TaskTemplate, TaskType};
use thiserror::Error;

/// Catalog construction failures. These abort load; they are never
/// tolerated at runtime the way bad date strings are.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("template '{0}' has zero duration")]
    ZeroDuration(String),

    #[error("template at index {0} has an empty title")]
    EmptyTitle(usize),
}

/// Static catalog of task templates, one ordered list per factory track.
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    manufacturing: Vec<TaskTemplate>,
    container: Vec<TaskTemplate>,
    packaging: Vec<TaskTemplate>,
}

impl TemplateCatalog {
    /// The standard cosmetics production catalog.
    pub fn standard() -> Self {
        // Construction from literals cannot trip validation
        Self::from_tracks(
            manufacturing_track(),
            container_track(),
            packaging_track(),
        )
        .expect("standard catalog is well-formed")
    }

    /// Build a catalog from explicit track lists, validating every template.
    pub fn from_tracks(
        manufacturing: Vec<TaskTemplate>,
        container: Vec<TaskTemplate>,
        packaging: Vec<TaskTemplate>,
    ) -> Result<Self, CatalogError> {
        for (index, template) in manufacturing
            .iter()
            .chain(container.iter())
            .chain(packaging.iter())
            .enumerate()
        {
            if template.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(index));
            }
            if template.duration_days == 0 {
                return Err(CatalogError::ZeroDuration(template.title.clone()));
            }
        }
        Ok(Self {
            manufacturing,
            container,
            packaging,
        })
    }

    /// Ordered templates for one factory track.
    pub fn templates_for(&self, factory_type: FactoryType) -> &[TaskTemplate] {
        match factory_type {
            FactoryType::Manufacturing => &self.manufacturing,
            FactoryType::Container => &self.container,
            FactoryType::Packaging => &self.packaging,
        }
    }

    /// Every template across all tracks, manufacturing first. Task-centric
    /// mode: used when factory assignment happens after scheduling rather
    /// than per factory.
    pub fn all_templates(&self) -> Vec<&TaskTemplate> {
        self.manufacturing
            .iter()
            .chain(self.container.iter())
            .chain(self.packaging.iter())
            .collect()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn manufacturing_track() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new("Product design", TaskType::Design, 5)
            .priority(Priority::High)
            .roles(&[Role::Designer]),
        TaskTemplate::new("Raw material sourcing", TaskType::Sourcing, 7)
            .priority(Priority::High)
            .roles(&[Role::SourcingManager])
            .depends_on_previous(),
        TaskTemplate::new("Sample production", TaskType::Prototyping, 10)
            .priority(Priority::Urgent)
            .roles(&[Role::ProcessEngineer, Role::ProductionManager])
            .depends_on_previous(),
        TaskTemplate::new("Sample quality check", TaskType::QualityCheck, 3)
            .priority(Priority::High)
            .roles(&[Role::QualityInspector])
            .depends_on_previous(),
        TaskTemplate::new("Mass production", TaskType::MassProduction, 14)
            .priority(Priority::Urgent)
            .roles(&[Role::ProductionManager])
            .depends_on_previous(),
        TaskTemplate::new("Final quality inspection", TaskType::FinalInspection, 3)
            .priority(Priority::High)
            .roles(&[Role::QualityInspector])
            .depends_on_previous(),
    ]
}

fn container_track() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new("Container mold design", TaskType::Design, 7)
            .priority(Priority::High)
            .roles(&[Role::Designer]),
        TaskTemplate::new("Mold fabrication", TaskType::Tooling, 10)
            .priority(Priority::High)
            .roles(&[Role::ProcessEngineer])
            .depends_on_previous(),
        TaskTemplate::new("Injection molding run", TaskType::MassProduction, 7)
            .priority(Priority::Medium)
            .roles(&[Role::ProductionManager])
            .depends_on_previous(),
        TaskTemplate::new("Container quality check", TaskType::QualityCheck, 2)
            .priority(Priority::Medium)
            .roles(&[Role::QualityInspector])
            .depends_on_previous(),
    ]
}

fn packaging_track() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new("Packaging design", TaskType::Design, 5)
            .priority(Priority::Medium)
            .roles(&[Role::Designer]),
        TaskTemplate::new("Proof printing", TaskType::Printing, 3)
            .priority(Priority::Medium)
            .roles(&[Role::PrintOperator])
            .depends_on_previous(),
        TaskTemplate::new("Print color correction", TaskType::Printing, 2)
            .priority(Priority::Medium)
            .roles(&[Role::PrintOperator, Role::Designer])
            .depends_on_previous(),
        TaskTemplate::new("Mass printing", TaskType::Printing, 5)
            .priority(Priority::High)
            .roles(&[Role::PrintOperator])
            .depends_on_previous(),
        TaskTemplate::new("Packaging quality check", TaskType::QualityCheck, 2)
            .priority(Priority::Medium)
            .roles(&[Role::QualityInspector])
            .depends_on_previous(),
    ]
}
