//! Macros for reducing boilerplate when defining entity adapters
//!
//! These macros generate the repetitive pieces every adapter needs: the
//! `Entity` bookkeeping getters, the closed sort-key enumeration and the
//! sort table registration.

/// Implement [`Entity`](crate::core::Entity) for a record struct
///
/// The struct must have `id`, `created` and `last_modified` fields. Pass
/// `owned` for records that belong to one account through an `owner` field.
///
/// # Example
/// ```rust,ignore
/// impl_entity!(Doctor, "doctor");
/// impl_entity!(Allergy, "allergy", owned);
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $type_name:expr) => {
        $crate::impl_entity!(@base $type, $type_name, {});
    };
    ($type:ident, $type_name:expr, owned) => {
        $crate::impl_entity!(@base $type, $type_name, {
            fn owner(&self) -> Option<::uuid::Uuid> {
                Some(self.owner)
            }
        });
    };
    (@base $type:ident, $type_name:expr, { $($extra:tt)* }) => {
        impl $crate::core::entity::Entity for $type {
            fn entity_type() -> &'static str {
                $type_name
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn created(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created
            }

            fn last_modified(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.last_modified
            }

            $($extra)*
        }
    };
}

/// Declare a closed sort-key enumeration
///
/// The generated enum serializes by variant name and parses leniently:
/// names match case-insensitively with underscores ignored
/// (`"LastName"`, `"last_name"` and `"lastname"` are the same key), and a
/// decimal string selects the variant by declaration index.
///
/// # Example
/// ```rust,ignore
/// sort_keys! {
///     /// Sort keys for places
///     pub enum PlaceSortKey {
///         City,
///         District,
///         Created,
///         LastModified,
///     }
/// }
///
/// assert_eq!("district".parse::<PlaceSortKey>(), Ok(PlaceSortKey::District));
/// assert_eq!("0".parse::<PlaceSortKey>(), Ok(PlaceSortKey::City));
/// ```
#[macro_export]
macro_rules! sort_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            /// Every key, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The key's canonical name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::query::UnknownSortKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                let unknown = || $crate::query::UnknownSortKey(s.to_string());

                if let Ok(index) = wanted.parse::<usize>() {
                    return Self::ALL.get(index).copied().ok_or_else(unknown);
                }

                let normalized: String = wanted
                    .chars()
                    .filter(|c| *c != '_')
                    .flat_map(char::to_lowercase)
                    .collect();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|key| key.as_str().to_lowercase() == normalized)
                    .ok_or_else(unknown)
            }
        }
    };
}

/// Implement [`Sortable`](crate::query::Sortable) with a lazily built sort table
///
/// The first key listed is the entity's default.
///
/// # Example
/// ```rust,ignore
/// impl_sortable!(Place, PlaceSortKey, {
///     City => |p| (&p.city).into(),
///     District => |p| (&p.district).into(),
///     Created => |p| p.created.into(),
///     LastModified => |p| p.last_modified.into(),
/// });
/// ```
#[macro_export]
macro_rules! impl_sortable {
    (
        $type:ident, $key:ident, {
            $default:ident => $default_extract:expr
            $(, $variant:ident => $extract:expr )* $(,)?
        }
    ) => {
        impl $crate::query::sort::Sortable for $type {
            type SortKey = $key;

            fn sort_table() -> &'static $crate::query::sort::SortTable<$key, $type> {
                static TABLE: ::std::sync::OnceLock<$crate::query::sort::SortTable<$key, $type>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    $crate::query::sort::SortTable::<$key, $type>::new($key::$default, $default_extract)
                        $( .key($key::$variant, $extract) )*
                })
            }
        }
    };
}
