use sea_orm::{
    entity::prelude::*, sea_query::LikeExpr, Condition, DatabaseConnection, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Separator used to pack `additional_images` into one text column.
pub const IMAGE_SEPARATOR: &str = ",";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub publisher_position: String,
    pub business_name: String,
    pub business_sector: String,
    pub job_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub salary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub benefits: Option<String>,
    pub publisher_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub contact_info: Option<String>,
    pub thumbnail_image: String,
    #[sea_orm(column_type = "Text")]
    pub additional_images: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations") }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// `additional_images` unpacked in upload order.
    pub fn additional_image_list(&self) -> Vec<String> {
        split_image_names(&self.additional_images)
    }
}

/// A row ready to insert; `id` and `created_at` come from the database.
#[derive(Clone, Debug, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub publisher_position: String,
    pub business_name: String,
    pub business_sector: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub benefits: Option<String>,
    pub publisher_name: Option<String>,
    pub contact_info: Option<String>,
    pub thumbnail_image: String,
    pub additional_images: String,
}

/// Image columns computed from the stored upload names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFields {
    pub thumbnail_image: String,
    pub additional_images: String,
}

/// First name becomes the thumbnail, the rest are packed with [`IMAGE_SEPARATOR`].
pub fn derive_image_fields(names: &[String]) -> Result<ImageFields, errors::ModelError> {
    let (first, rest) = names
        .split_first()
        .ok_or_else(|| errors::ModelError::Validation("at least one image is required".into()))?;
    // a separator inside a name would silently split it on read
    if rest.iter().any(|n| n.contains(IMAGE_SEPARATOR)) {
        return Err(errors::ModelError::Validation(format!(
            "image filename must not contain '{}'",
            IMAGE_SEPARATOR
        )));
    }
    Ok(ImageFields {
        thumbnail_image: first.clone(),
        additional_images: rest.join(IMAGE_SEPARATOR),
    })
}

pub fn split_image_names(packed: &str) -> Vec<String> {
    packed
        .split(IMAGE_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Optional list filters. Empty strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    pub search: Option<String>,
    #[serde(alias = "job_type")]
    pub job_type: Option<String>,
}

impl JobQuery {
    pub fn normalized(&self) -> JobQuery {
        let keep = |v: &Option<String>| v.as_ref().filter(|s| !s.is_empty()).cloned();
        JobQuery { search: keep(&self.search), job_type: keep(&self.job_type) }
    }

    /// In-process equivalent of the SQL built by [`list`].
    pub fn matches(&self, m: &Model) -> bool {
        let q = self.normalized();
        if let Some(s) = q.search.as_deref() {
            let hit = m.title.contains(s)
                || m.description.contains(s)
                || m.publisher_position.contains(s);
            if !hit {
                return false;
            }
        }
        if let Some(t) = q.job_type.as_deref() {
            if m.job_type.as_deref() != Some(t) {
                return false;
            }
        }
        true
    }
}

/// `%text%` with LIKE metacharacters escaped so the search is a literal substring.
pub fn like_pattern(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

fn contains_expr(pattern: &str) -> LikeExpr {
    LikeExpr::new(pattern.to_string()).escape('\\')
}

pub async fn create(db: &DatabaseConnection, new: NewJob) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        title: Set(new.title),
        description: Set(new.description),
        publisher_position: Set(new.publisher_position),
        business_name: Set(new.business_name),
        business_sector: Set(new.business_sector),
        job_type: Set(new.job_type),
        salary: Set(new.salary),
        benefits: Set(new.benefits),
        publisher_name: Set(new.publisher_name),
        contact_info: Set(new.contact_info),
        thumbnail_image: Set(new.thumbnail_image),
        additional_images: Set(new.additional_images),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All jobs matching `query`, newest first.
pub async fn list(db: &DatabaseConnection, query: &JobQuery) -> Result<Vec<Model>, errors::ModelError> {
    let query = query.normalized();
    let mut finder = Entity::find();
    if let Some(s) = query.search.as_deref() {
        let pattern = like_pattern(s);
        finder = finder.filter(
            Condition::any()
                .add(Column::Title.like(contains_expr(&pattern)))
                .add(Column::Description.like(contains_expr(&pattern)))
                .add(Column::PublisherPosition.like(contains_expr(&pattern))),
        );
    }
    if let Some(t) = query.job_type {
        finder = finder.filter(Column::JobType.eq(t));
    }
    finder
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
