//! Class names from the shipped stylesheet modules.
//!
//! Names follow the BEM convention used in `static/css`. All classes are
//! accessed via associated functions so call sites read like the stylesheet.

/// Section layout classes (`/css/theme.css`)
pub struct SectionCss;

impl SectionCss {
    /// Page-width section wrapper
    pub fn section() -> &'static str { "section" }
    /// Center the section content
    pub fn center() -> &'static str { "section--center" }
    /// Alternate (shaded) section background
    pub fn odd() -> &'static str { "section--odd" }
    /// Inner content column with max width
    pub fn inner() -> &'static str { "section--inner" }
    /// Stack the inner content vertically
    pub fn column() -> &'static str { "section--column" }
    /// Section title heading
    pub fn title() -> &'static str { "section__title" }
    /// Section subtitle paragraph
    pub fn subtitle() -> &'static str { "section__subtitle" }
}

/// Hero banner classes (`/css/case-study.css`)
pub struct JumbotronCss;

impl JumbotronCss {
    pub fn jumbotron() -> &'static str { "jumbotron" }
    pub fn summary() -> &'static str { "jumbotron__summary" }
    pub fn header() -> &'static str { "jumbotron__header" }
    pub fn logo() -> &'static str { "jumbotron__logo" }
    /// "Case study" kicker label next to the partner logo
    pub fn name() -> &'static str { "jumbotron__name" }
    pub fn description() -> &'static str { "jumbotron__description" }
    pub fn banner() -> &'static str { "jumbotron__banner" }
}

/// Outcome highlight classes (`/css/case-study.css`)
pub struct OutcomeCss;

impl OutcomeCss {
    /// Grid wrapper around the outcome items
    pub fn wrapper() -> &'static str { "outcome__wrapper" }
    /// One outcome highlight
    pub fn outcome() -> &'static str { "outcome" }
    /// Icon preceding the outcome label
    pub fn icon() -> &'static str { "outcome__icon" }
}

/// Testimonial card classes (`/css/case-study.css`)
pub struct CardCss;

impl CardCss {
    pub fn card() -> &'static str { "card" }
    pub fn title() -> &'static str { "card__title" }
    pub fn subtitle() -> &'static str { "card__subtitle" }
    /// Decorative curly quote marks around a pull-quote
    pub fn quote() -> &'static str { "card__quote" }
}

/// Chart image classes (`/css/case-study.css`)
pub struct ChartCss;

impl ChartCss {
    pub fn chart() -> &'static str { "chart" }
}

/// Button classes (`/css/theme.css`)
pub struct ButtonCss;

impl ButtonCss {
    pub fn button() -> &'static str { "button" }
    pub fn primary() -> &'static str { "button--primary" }
    pub fn secondary() -> &'static str { "button--secondary" }
    /// Unstyled button, used to wrap images and logos in a link
    pub fn plain() -> &'static str { "button--plain" }
}
