//! Templates for every screen. Layout strings (truncation, joins, padding) are computed
//! in `render.rs`; templates only pick styles and arrange lines.

pub const BOOKS: &str = "books";
pub const CARDS: &str = "cards";
pub const COURSE_FILES: &str = "course_files";
pub const SEARCH: &str = "search";
pub const FACETS: &str = "facets";
pub const SETTINGS: &str = "settings";
pub const WELCOME: &str = "welcome";
pub const HOME: &str = "home";
pub const MESSAGES: &str = "messages";

const BOOKS_TEMPLATE: &str = r#"{% for b in rows -%}
{{ b.icon }} {{ b.title | style("title") }} {{ b.byline | style("muted") }}
   {{ b.stars | style("rating") }} {{ b.rating | style("muted") }}  {{ b.sample_type | style("tag") }}  {{ b.published | style("muted") }}
   {{ b.description }}
   {{ b.categories | style("accent") }}
   {{ b.download | style("link") }}

{% else -%}
{{ empty | style("muted") }}
{% endfor %}"#;

const CARDS_TEMPLATE: &str = r#"{% for c in rows -%}
{{ c.icon }} {{ c.title | style("title") }}  {{ c.file_type | style("tag") }}
   {{ c.description }}
   {{ c.technologies | style("accent") }}
   {{ c.meta | style("muted") }}
   {{ c.download | style("link") }}

{% else -%}
{{ empty | style("muted") }}
{% endfor %}"#;

const COURSE_FILES_TEMPLATE: &str = r#"{% for f in rows -%}
{{ f.icon }} {{ f.title | style("title") }}
   {{ f.description }}
   {{ f.meta | style("muted") }}
   {{ f.download | style("link") }}

{% else -%}
{{ empty | style("muted") }}
{% endfor %}"#;

const SEARCH_TEMPLATE: &str = r#"{% if rows -%}
{{ heading | style("heading") }}

{% for r in rows -%}
{{ r.icon }} {{ r.title | style("title") }}  {{ r.kind | style("tag") }}
   {{ r.description }}
   {{ r.url | style("link") }}

{% endfor %}{% endif %}"#;

const FACETS_TEMPLATE: &str = r#"{{ heading | style("heading") }}
{% for v in values -%}
  {{ v }}
{% else -%}
  {{ "(none)" | style("muted") }}
{% endfor %}"#;

const SETTINGS_TEMPLATE: &str = r#"{{ "Theme      " | style("label") }}{{ theme }} {{ appearance | style("muted") }}
{{ "Color      " | style("label") }}{{ dot | style("accent") }} {{ color }}
{{ "Animation  " | style("label") }}{{ animation }}
{{ "Welcome    " | style("label") }}{{ welcome | style("muted") }}
"#;

const WELCOME_TEMPLATE: &str = r#"{{ rule | style("accent") }}
{{ title | style("heading") }}
{{ message }}
{{ hint | style("muted") }}
{{ rule | style("accent") }}
"#;

const HOME_TEMPLATE: &str = r#"{{ badge | style("tag") }}
{{ headline | style("heading") }}
{{ subtitle | style("muted") }}
{% for p in about %}
{{ p }}
{% endfor %}
{%- for s in sections %}
{{ s.title | style("heading") }}  {{ s.hint | style("muted") }}
{{ s.blurb | style("muted") }}
{% for line in s.lines -%}
  {{ line.icon }} {{ line.title | style("title") }}  {{ line.meta | style("muted") }}
{% endfor %}
{%- endfor %}"#;

const MESSAGES_TEMPLATE: &str = r#"{% for m in messages -%}
{{ m.content | style(m.style) }}
{% endfor %}"#;

pub const ALL: &[(&str, &str)] = &[
    (BOOKS, BOOKS_TEMPLATE),
    (CARDS, CARDS_TEMPLATE),
    (COURSE_FILES, COURSE_FILES_TEMPLATE),
    (SEARCH, SEARCH_TEMPLATE),
    (FACETS, FACETS_TEMPLATE),
    (SETTINGS, SETTINGS_TEMPLATE),
    (WELCOME, WELCOME_TEMPLATE),
    (HOME, HOME_TEMPLATE),
    (MESSAGES, MESSAGES_TEMPLATE),
];
