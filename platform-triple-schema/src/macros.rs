//! Internal macros for platform-triple-schema

/// Makes newtypes of `String` that are convenient to use but can't be mixed up
/// with each other (a target triple is not a platform name, even though both
/// are "just strings" on the wire).
#[macro_export]
macro_rules! declare_strongly_typed_string {
    ($(
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
    )+) => {
        $(
            #[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
            #[derive(serde::Serialize, serde::Deserialize)]
            #[derive(schemars::JsonSchema)]
            #[serde(transparent)]
            #[repr(transparent)]
            $(#[$attr])*
            $vis struct $name(String);

            #[automatically_derived]
            impl $name {
                #[doc = "Constructs a new value from an owned string"]
                #[inline]
                pub const fn new(raw: String) -> Self {
                    Self(raw)
                }
                #[doc = "Provides access to the underlying value as a string slice"]
                #[inline]
                pub fn as_str(&self) -> &str {
                    &self.0
                }
                #[doc = "Unwraps the underlying [`String`] value"]
                #[inline]
                pub fn take(self) -> String {
                    self.0
                }
            }
            #[automatically_derived]
            impl ::std::convert::From<::std::string::String> for $name {
                #[inline]
                fn from(s: ::std::string::String) -> Self {
                    Self::new(s)
                }
            }
            #[automatically_derived]
            impl ::std::convert::From<&'_ str> for $name {
                #[inline]
                fn from(s: &str) -> Self {
                    Self::new(::std::borrow::ToOwned::to_owned(s))
                }
            }
            #[automatically_derived]
            impl ::std::convert::From<$name> for ::std::string::String {
                #[inline]
                fn from(s: $name) -> Self {
                    s.0
                }
            }
            #[automatically_derived]
            impl ::std::ops::Deref for $name {
                type Target = str;
                #[inline]
                fn deref(&self) -> &str {
                    &self.0
                }
            }
            #[automatically_derived]
            impl ::std::convert::AsRef<str> for $name {
                #[inline]
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
            #[automatically_derived]
            impl ::std::borrow::Borrow<str> for $name {
                #[inline]
                fn borrow(&self) -> &str {
                    &self.0
                }
            }
            #[automatically_derived]
            impl ::std::cmp::PartialEq<str> for $name {
                #[inline]
                fn eq(&self, other: &str) -> bool {
                    self.0 == other
                }
            }
            #[automatically_derived]
            impl ::std::cmp::PartialEq<&'_ str> for $name {
                #[inline]
                fn eq(&self, other: &&str) -> bool {
                    self.0 == *other
                }
            }
            #[automatically_derived]
            impl ::std::fmt::Debug for $name {
                #[inline]
                fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                    <str as ::std::fmt::Debug>::fmt(&self.0, f)
                }
            }
            #[automatically_derived]
            impl ::std::fmt::Display for $name {
                #[inline]
                fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                    <str as ::std::fmt::Display>::fmt(&self.0, f)
                }
            }
        )+
    };
}
