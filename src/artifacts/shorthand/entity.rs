use derive_new::new;

/// Characters that usually separate the parts of a branch name (`feature/foo`, `fix_bar`, ...)
pub const SEPARATORS: [char; 4] = ['/', '_', '.', '-'];

/// The kind of named thing a shorthand can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Branch,
    Remote,
}

/// A branch or remote known to the repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Entity {
    kind: EntityKind,
    #[new(into)]
    name: String,
}

impl Entity {
    pub fn branch(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Branch, name)
    }

    pub fn remote(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Remote, name)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_branch(&self) -> bool {
        self.kind == EntityKind::Branch
    }

    pub fn is_remote(&self) -> bool {
        self.kind == EntityKind::Remote
    }

    /// The part of the name after its first separator, e.g. `test` for `feature-test`
    pub fn suffix(&self) -> Option<&str> {
        self.name.split_once(SEPARATORS).map(|(_, rest)| rest)
    }
}

/// Score how closely `needle` matches the entity name `predicate`.
///
/// `1.0` is a confident match and `0.0` no match at all. In between, the score shrinks as the
/// matched part of the name grows, since a single letter says less about a long name:
///
/// 1. exact match of the whole name;
/// 2. exact match of everything after the first separator (`prefix/master` matches `master`);
/// 3. first letter of that tail matches: `1 / tail length`;
/// 4. first letter of the whole name matches: `1 / tail length`. This one is coarse and will
///    happily tie `feature-foo` and `feature-bar` for `f`.
pub fn entity_match(predicate: &str, needle: &str) -> f64 {
    if predicate == needle {
        return 1.0;
    }

    let parts = predicate.split(SEPARATORS).collect::<Vec<_>>();
    let tail = if parts.len() == 1 {
        predicate.to_string()
    } else {
        parts[1..].join("-")
    };

    if tail == needle {
        return 1.0;
    }

    let needle_head = needle.chars().next();
    let weak_score = 1.0 / tail.chars().count().max(1) as f64;

    if needle_head.is_some() && tail.chars().next() == needle_head {
        return weak_score;
    }

    if needle_head.is_some() && predicate.chars().next() == needle_head {
        return weak_score;
    }

    0.0
}
