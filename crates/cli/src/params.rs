// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered parameter mappings for template rendering.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase,
};
use indexmap::IndexMap;

/// Placeholder name to substitution value, iterated in insertion order.
///
/// Order is observable: the renderer applies entries one at a time, so a
/// value inserted by an earlier key is visible to later keys.
pub type TemplateParams = IndexMap<String, String>;

/// Enrich `params` with case-transformed variants of every entry.
///
/// A parameter `name` with value `my widget` gains `name:pascal`
/// (`MyWidget`), `name:camel` (`myWidget`), `name:snake` (`my_widget`),
/// `name:kebab` (`my-widget`), `name:constant` (`MY_WIDGET`), and
/// `name:title` (`My Widget`). Derived keys never overwrite keys already
/// present, and the `:` keeps them out of the plain `{% name %}` match.
pub fn with_case_variants(params: &TemplateParams) -> TemplateParams {
    let mut enriched = params.clone();
    for (name, value) in params {
        let variants = [
            ("pascal", value.to_upper_camel_case()),
            ("camel", value.to_lower_camel_case()),
            ("snake", value.to_snake_case()),
            ("kebab", value.to_kebab_case()),
            ("constant", value.to_shouty_snake_case()),
            ("title", value.to_title_case()),
        ];
        for (suffix, transformed) in variants {
            enriched
                .entry(format!("{name}:{suffix}"))
                .or_insert(transformed);
        }
    }
    enriched
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
