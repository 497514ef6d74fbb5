macro_rules! api_path {
    ($path:literal) => {
        concat!("/api", $path)
    };
}

/// Catalog API route definitions shared across the Folio services.
///
/// Trailing slashes are part of the public surface; clients call these paths
/// exactly as written.
pub mod catalog {
    pub const ROOT: &str = "/api";

    pub mod authors {
        pub const COLLECTION: &str = api_path!("/authors/");
        pub const ITEM: &str = api_path!("/authors/{author_id}/");

        pub mod books {
            /// All books regardless of owner. The literal `books` segment
            /// wins over the `{author_id}` capture when both could match.
            pub const COLLECTION: &str = api_path!("/authors/books/");
            pub const OWNED: &str = api_path!("/authors/{author_id}/books/");
            pub const ITEM: &str = api_path!("/authors/{author_id}/books/{book_id}/");
        }
    }
}

/// Helpers for constructing concrete paths from the route constants.
pub mod helpers {
    /// Replace a single `{param}` placeholder in a route.
    pub fn replace_param(route: &str, param: &str, value: impl AsRef<str>) -> String {
        route.replace(param, value.as_ref())
    }

    /// Replace multiple path parameters in order.
    pub fn replace_params(
        route: &str,
        params: &[(impl AsRef<str>, impl AsRef<str>)],
    ) -> String {
        let mut path = route.to_string();
        for (param, value) in params {
            path = path.replace(param.as_ref(), value.as_ref());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_item_path_is_prefixed_and_slashed() {
        assert_eq!(catalog::authors::ITEM, "/api/authors/{author_id}/");
    }

    #[test]
    fn replace_params_builds_book_item_path() {
        let path = helpers::replace_params(
            catalog::authors::books::ITEM,
            &[("{author_id}", "1"), ("{book_id}", "7")],
        );
        assert_eq!(path, "/api/authors/1/books/7/");
    }
}
