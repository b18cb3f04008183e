//! Applies successful remote results to the cached collections.
//!
//! There are exactly three write patterns: insert-on-create, upsert-on-update
//! and filter-on-delete. Deletes cascade only along the relationships listed
//! in [`RELATIONS`], and only one level deep.

use crate::models::{Keyword, Project, RankEntry, Schedule, SearchConsoleDomain, Tag};

/// Kinds of cached entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Keyword,
    RankEntry,
    Tag,
    Schedule,
    SearchConsoleDomain,
}

/// What happens to a child row when its parent is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// Drop the child row
    Remove,
    /// Keep the child row, clear its reference to the parent
    Detach,
}

/// A declared foreign-key relationship.
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub parent: EntityKind,
    pub child: EntityKind,
    pub on_delete: OnDelete,
}

/// The cascade policy. A relationship not listed here is never cleaned up.
pub const RELATIONS: &[Relation] = &[
    Relation {
        parent: EntityKind::Project,
        child: EntityKind::Keyword,
        on_delete: OnDelete::Remove,
    },
    Relation {
        parent: EntityKind::Project,
        child: EntityKind::RankEntry,
        on_delete: OnDelete::Remove,
    },
    Relation {
        parent: EntityKind::Project,
        child: EntityKind::Schedule,
        on_delete: OnDelete::Remove,
    },
    Relation {
        parent: EntityKind::Project,
        child: EntityKind::SearchConsoleDomain,
        on_delete: OnDelete::Detach,
    },
    Relation {
        parent: EntityKind::Keyword,
        child: EntityKind::RankEntry,
        on_delete: OnDelete::Remove,
    },
    Relation {
        parent: EntityKind::Tag,
        child: EntityKind::Keyword,
        on_delete: OnDelete::Detach,
    },
];

/// A cached entity identified by its server-assigned id.
pub trait Entity: Clone {
    const KIND: EntityKind;

    fn id(&self) -> i64;

    /// Does this row reference `parent_id` through its `parent` foreign key?
    fn references(&self, _parent: EntityKind, _parent_id: i64) -> bool {
        false
    }

    /// Clear the reference to `parent_id`.
    fn detach(&mut self, _parent: EntityKind, _parent_id: i64) {}
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Keyword {
    const KIND: EntityKind = EntityKind::Keyword;

    fn id(&self) -> i64 {
        self.id
    }

    fn references(&self, parent: EntityKind, parent_id: i64) -> bool {
        match parent {
            EntityKind::Project => self.project_id == parent_id,
            EntityKind::Tag => self.has_tag(parent_id),
            _ => false,
        }
    }

    fn detach(&mut self, parent: EntityKind, parent_id: i64) {
        if parent == EntityKind::Tag {
            self.detach_tag(parent_id);
        }
    }
}

impl Entity for RankEntry {
    const KIND: EntityKind = EntityKind::RankEntry;

    fn id(&self) -> i64 {
        self.id
    }

    fn references(&self, parent: EntityKind, parent_id: i64) -> bool {
        match parent {
            EntityKind::Project => self.project_id == Some(parent_id),
            EntityKind::Keyword => self.keyword_id == parent_id,
            _ => false,
        }
    }
}

impl Entity for Tag {
    const KIND: EntityKind = EntityKind::Tag;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Schedule {
    const KIND: EntityKind = EntityKind::Schedule;

    fn id(&self) -> i64 {
        self.id
    }

    fn references(&self, parent: EntityKind, parent_id: i64) -> bool {
        parent == EntityKind::Project && self.project_id == parent_id
    }
}

impl Entity for SearchConsoleDomain {
    const KIND: EntityKind = EntityKind::SearchConsoleDomain;

    fn id(&self) -> i64 {
        self.id
    }

    fn references(&self, parent: EntityKind, parent_id: i64) -> bool {
        parent == EntityKind::Project && self.project_id == Some(parent_id)
    }

    fn detach(&mut self, parent: EntityKind, _parent_id: i64) {
        if parent == EntityKind::Project {
            self.project_id = None;
        }
    }
}

/// An ordered collection of one entity kind.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the whole collection with an authoritative list.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Insert-on-create.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Insert-on-create for a batch, preserving order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Upsert-on-update. Returns false, leaving the collection untouched, when
    /// the id is not cached.
    pub fn upsert(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => {
                tracing::debug!("Dropping update for uncached {:?} {}", T::KIND, item.id());
                false
            }
        }
    }

    /// Modify a cached entity in place, located by id at the time of the call.
    pub fn modify(&mut self, id: i64, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(existing) => {
                f(existing);
                true
            }
            None => false,
        }
    }

    /// Filter-on-delete. Returns the number of rows removed.
    pub fn remove(&mut self, id: i64) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        before - self.items.len()
    }

    fn cascade(&mut self, relation: &Relation, parent_id: i64) -> usize {
        match relation.on_delete {
            OnDelete::Remove => {
                let before = self.items.len();
                self.items
                    .retain(|item| !item.references(relation.parent, parent_id));
                before - self.items.len()
            }
            OnDelete::Detach => {
                let mut touched = 0;
                for item in self
                    .items
                    .iter_mut()
                    .filter(|item| item.references(relation.parent, parent_id))
                {
                    item.detach(relation.parent, parent_id);
                    touched += 1;
                }
                touched
            }
        }
    }
}

/// Every cached collection.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub projects: Collection<Project>,
    pub keywords: Collection<Keyword>,
    pub rank_data: Collection<RankEntry>,
    pub tags: Collection<Tag>,
    pub schedules: Collection<Schedule>,
    pub gsc_domains: Collection<SearchConsoleDomain>,
}

impl Cache {
    /// Filter-on-delete with the declared cascades.
    pub fn delete(&mut self, kind: EntityKind, id: i64) {
        let removed = match kind {
            EntityKind::Project => self.projects.remove(id),
            EntityKind::Keyword => self.keywords.remove(id),
            EntityKind::RankEntry => self.rank_data.remove(id),
            EntityKind::Tag => self.tags.remove(id),
            EntityKind::Schedule => self.schedules.remove(id),
            EntityKind::SearchConsoleDomain => self.gsc_domains.remove(id),
        };
        tracing::debug!("Removed {} cached {:?} row(s) for id {}", removed, kind, id);

        for relation in RELATIONS.iter().filter(|r| r.parent == kind) {
            let affected = match relation.child {
                EntityKind::Project => self.projects.cascade(relation, id),
                EntityKind::Keyword => self.keywords.cascade(relation, id),
                EntityKind::RankEntry => self.rank_data.cascade(relation, id),
                EntityKind::Tag => self.tags.cascade(relation, id),
                EntityKind::Schedule => self.schedules.cascade(relation, id),
                EntityKind::SearchConsoleDomain => self.gsc_domains.cascade(relation, id),
            };
            if affected > 0 {
                tracing::debug!(
                    "Cascade {:?} {} -> {:?}: {:?} {} row(s)",
                    kind,
                    id,
                    relation.child,
                    relation.on_delete,
                    affected
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64) -> Project {
        Project {
            id,
            name: format!("Project {id}"),
            domain: format!("p{id}.example"),
            active: true,
            branded_terms: None,
            conversion_rate: None,
            conversion_value: None,
        }
    }

    fn keyword(id: i64, project_id: i64, tags: Vec<i64>) -> Keyword {
        Keyword {
            id,
            project_id,
            text: format!("keyword {id}"),
            active: true,
            search_volume: None,
            last_volume_update: None,
            tags,
        }
    }

    fn rank(id: i64, keyword_id: i64, project_id: Option<i64>) -> RankEntry {
        RankEntry {
            id,
            keyword_id,
            project_id,
            keyword: None,
            domain: None,
            rank: Some(1),
            date: None,
            full_data: None,
            search_volume: None,
        }
    }

    #[test]
    fn test_upsert_miss_leaves_collection_unchanged() {
        let mut projects = Collection::default();
        projects.insert(project(1));

        let mut renamed = project(2);
        renamed.name = "Ghost".to_string();
        assert!(!projects.upsert(renamed));

        assert_eq!(projects.items(), &[project(1)]);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut projects = Collection::default();
        projects.extend([project(1), project(2), project(3)]);

        let mut renamed = project(2);
        renamed.name = "Renamed".to_string();
        assert!(projects.upsert(renamed));

        let names: Vec<_> = projects.items().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Project 1", "Renamed", "Project 3"]);
    }

    #[test]
    fn test_project_delete_cascades_declared_children() {
        let mut cache = Cache::default();
        cache.projects.extend([project(1), project(2)]);
        cache.keywords.extend([keyword(10, 1, vec![]), keyword(11, 2, vec![]), keyword(12, 1, vec![])]);
        cache.rank_data.extend([rank(100, 10, Some(1)), rank(101, 11, Some(2))]);

        cache.delete(EntityKind::Project, 1);

        assert_eq!(cache.projects.items(), &[project(2)]);
        let keyword_ids: Vec<_> = cache.keywords.items().iter().map(|k| k.id).collect();
        assert_eq!(keyword_ids, [11]);
        let rank_ids: Vec<_> = cache.rank_data.items().iter().map(|r| r.id).collect();
        assert_eq!(rank_ids, [101]);
    }

    #[test]
    fn test_cascade_is_not_transitive() {
        let mut cache = Cache::default();
        cache.projects.insert(project(1));
        cache.keywords.insert(keyword(10, 1, vec![]));
        // Entry without a project reference: only the keyword cascade could reach it.
        cache.rank_data.insert(rank(100, 10, None));

        cache.delete(EntityKind::Project, 1);

        assert!(cache.keywords.items().is_empty());
        assert_eq!(cache.rank_data.items().len(), 1);
    }

    #[test]
    fn test_keyword_delete_removes_its_rank_entries() {
        let mut cache = Cache::default();
        cache.keywords.extend([keyword(10, 1, vec![]), keyword(11, 1, vec![])]);
        cache.rank_data.extend([rank(100, 10, None), rank(101, 11, None), rank(102, 10, None)]);

        cache.delete(EntityKind::Keyword, 10);

        let rank_ids: Vec<_> = cache.rank_data.items().iter().map(|r| r.id).collect();
        assert_eq!(rank_ids, [101]);
    }

    #[test]
    fn test_tag_delete_detaches_instead_of_removing() {
        let mut cache = Cache::default();
        cache.tags.extend([
            Tag { id: 5, name: "brand".to_string() },
            Tag { id: 6, name: "money".to_string() },
        ]);
        cache.keywords.extend([keyword(10, 1, vec![5, 6]), keyword(11, 1, vec![5])]);

        cache.delete(EntityKind::Tag, 5);

        assert_eq!(cache.tags.items().len(), 1);
        assert_eq!(cache.keywords.items().len(), 2);
        assert_eq!(cache.keywords.get(10).unwrap().tags, [6]);
        assert!(cache.keywords.get(11).unwrap().tags.is_empty());
    }

    #[test]
    fn test_project_delete_unbinds_domain() {
        let mut cache = Cache::default();
        cache.projects.insert(project(7));
        cache.gsc_domains.insert(SearchConsoleDomain {
            id: 42,
            domain: "example.com".to_string(),
            project_id: Some(7),
            user_id: None,
        });

        cache.delete(EntityKind::Project, 7);

        let domain = cache.gsc_domains.get(42).unwrap();
        assert_eq!(domain.project_id, None);
    }
}
