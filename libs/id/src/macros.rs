//! Macros for defining ID kinds.

/// Macro to define an ID kind with a specific prefix.
///
/// This generates:
/// - an uninhabited kind marker implementing [`IdKind`](crate::IdKind)
/// - a type alias for [`PrefixId`](crate::PrefixId) over that kind
///
/// # Example
///
/// ```
/// use prefix_id::define_id;
///
/// define_id!(pub UserId, UserKind, "user");
/// define_id!(pub OrgId, OrgKind, "org");
///
/// let user_id = UserId::new();
/// assert!(user_id.as_str().starts_with("user_"));
/// assert!(OrgId::try_parse(user_id.as_str()).is_none());
/// ```
#[macro_export]
macro_rules! define_id {
    ($vis:vis $name:ident, $kind:ident, $prefix:literal) => {
        #[doc = concat!("Kind marker for IDs prefixed with `", $prefix, "`.")]
        #[derive(Debug)]
        $vis enum $kind {}

        impl $crate::IdKind for $kind {
            const PREFIX: &'static str = $prefix;
        }

        #[doc = concat!("A `", $prefix, "_`-prefixed ID.")]
        $vis type $name = $crate::PrefixId<$kind>;
    };
}
