use super::project;
use sea_orm::entity::prelude::*;

/// Whether a record is a leaf part or an assembly that may own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PartType {
    #[sea_orm(string_value = "part")]
    Part,
    #[sea_orm(string_value = "assembly")]
    Assembly,
}

impl PartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Part => "part",
            PartType::Assembly => "assembly",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "part" => Some(PartType::Part),
            "assembly" => Some(PartType::Assembly),
            _ => None,
        }
    }
}

/// Workflow state of a part. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PartStatus {
    #[sea_orm(string_value = "designing")]
    Designing,
    #[sea_orm(string_value = "ready")]
    Ready,
    #[sea_orm(string_value = "manufacturing")]
    Manufacturing,
    #[sea_orm(string_value = "outsourced")]
    Outsourced,
    #[sea_orm(string_value = "welding")]
    Welding,
    #[sea_orm(string_value = "coating")]
    Coating,
    #[sea_orm(string_value = "assembly")]
    Assembly,
    #[sea_orm(string_value = "done")]
    Done,
}

impl PartStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartStatus::Designing => "designing",
            PartStatus::Ready => "ready",
            PartStatus::Manufacturing => "manufacturing",
            PartStatus::Outsourced => "outsourced",
            PartStatus::Welding => "welding",
            PartStatus::Coating => "coating",
            PartStatus::Assembly => "assembly",
            PartStatus::Done => "done",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "designing" => Some(PartStatus::Designing),
            "ready" => Some(PartStatus::Ready),
            "manufacturing" => Some(PartStatus::Manufacturing),
            "outsourced" => Some(PartStatus::Outsourced),
            "welding" => Some(PartStatus::Welding),
            "coating" => Some(PartStatus::Coating),
            "assembly" => Some(PartStatus::Assembly),
            "done" => Some(PartStatus::Done),
            _ => None,
        }
    }

    /// Human-readable label for dashboards and status pickers.
    pub fn label(&self) -> &'static str {
        match self {
            PartStatus::Designing => "Design in progress",
            PartStatus::Ready => "Ready to manufacture",
            PartStatus::Manufacturing => "Manufacturing in progress",
            PartStatus::Outsourced => "Waiting on outsourced manufacturing",
            PartStatus::Welding => "Ready for welding",
            PartStatus::Coating => "Waiting on coating",
            PartStatus::Assembly => "Ready for assembly",
            PartStatus::Done => "Done",
        }
    }
}

/// A single part or assembly belonging to a project.
///
/// Assemblies may own child parts; the child's `parent_part_id` points back
/// at the assembly within the same project.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "parts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    /// Present only for parts nested under an assembly.
    pub parent_part_id: Option<i32>,
    pub part_type: PartType,
    /// Sequence suffix of the generated part number.
    pub number: i32,
    pub name: String,
    pub status: PartStatus,
    pub notes: Option<String>,
    pub source_material: Option<String>,
    pub have_material: bool,
    pub cut_length: Option<String>,
    pub quantity: Option<String>,
    pub drawing_created: bool,
    /// 0 = high, 1 = normal, 2 = low.
    pub priority: i32,
}

impl Model {
    /// Render the full part number, e.g. "1678-0204".
    pub fn full_number(&self, prefix: &str) -> String {
        format!("{}-{:04}", prefix, self.number)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id"
    )]
    Project,
    /// Self-referencing link from a child part to its parent assembly.
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentPartId", to = "Column::Id")]
    ParentPart,
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
