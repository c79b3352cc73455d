/// Defines an identifier enum with a stable slug, a display name and aliases.
///
/// Every generated enum carries a `Custom(String)` variant for technologies that
/// only exist in a catalog file. Serialisation uses the slug; deserialisation
/// accepts anything `from_name` accepts and falls back to `Custom`.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $slug:literal : $display_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.slug())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::resolve(&s))
            }
        }

        impl $enum_name {
            /// Stable machine-readable identifier
            pub fn slug(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $slug,
                    )*
                    Self::Custom(name) => name,
                }
            }

            /// Human-readable catalog name
            pub fn name(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $display_name,
                    )*
                    Self::Custom(name) => name,
                }
            }

            /// Looks up a built-in variant by display name, slug or alias (ASCII case-insensitive)
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim();
                $(
                    if name.eq_ignore_ascii_case($display_name)
                        || name.eq_ignore_ascii_case($slug)
                        $( || name.eq_ignore_ascii_case($alias) )*
                    {
                        return Some(Self::$variant);
                    }
                )*
                None
            }

            /// Like `from_name`, but unknown names become `Custom`
            pub fn resolve(name: &str) -> Self {
                match Self::from_name(name) {
                    Some(id) => id,
                    None => Self::Custom(name.trim().to_string()),
                }
            }

            pub fn is_custom(&self) -> bool {
                matches!(self, Self::Custom(_))
            }

            pub fn all_variants() -> &'static [Self] {
                const ALL: &[$enum_name] = &[
                    $(
                        $enum_name::$variant,
                    )*
                ];
                ALL
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
