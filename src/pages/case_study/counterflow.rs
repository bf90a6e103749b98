//! Counterflow Case Study
//!
//! Marketing case study describing how Counterflow AI uses QuestDB inside
//! their ThreatEye network security product. Pure content composition: no
//! input, no state, the same document every time.

use maud::{Markup, html};

use crate::assets::OutcomeIcon;
use crate::components::layout::page_layout::PageLayout;
use crate::components::layout::pull_quote::PullQuote;
use crate::components::primitives::button::Button;
use crate::components::primitives::image::Img;
use crate::helpers::classes;
use crate::pages::Outcome;
use crate::theme::{CardCss, ChartCss, JumbotronCss, OutcomeCss, SectionCss};

/// Metadata title for the browser tab and search results
pub const TITLE: &str =
    "Counterflow AI use QuestDB for machine learning-driven network security";

/// Meta description
pub const DESCRIPTION: &str =
    "QuestDB is used by Counterflow AI as a time series database for storing network \
     packet data analyzed by their real-time threat detection offering.";

/// Site-absolute canonical path of the page
pub const CANONICAL_PATH: &str = "/case-study/counterflow/";

/// Outcome highlights, in display order
pub const OUTCOMES: [Outcome; 6] = [
    Outcome {
        icon: OutcomeIcon::Dollar,
        label: "Cost reduction due to lower resource consumption",
    },
    Outcome {
        icon: OutcomeIcon::Workflow,
        label: "RESTful API support allows simple interoperation with existing stack",
    },
    Outcome {
        icon: OutcomeIcon::Leaf,
        label: "SQL compatibility simplifies developer onboarding",
    },
    Outcome {
        icon: OutcomeIcon::Gauge,
        label: "Powers a real-time system that operates at enterprise network speeds",
    },
    Outcome {
        icon: OutcomeIcon::Voice,
        label: "Active developer community that helps with troubleshooting",
    },
    Outcome {
        icon: OutcomeIcon::Time,
        label: "Fast turnaround time from prototype phase to production deployment",
    },
];

/// Partner website, tagged as a referral
const PARTNER_URL: &str = "https://www.counterflow.ai/?utm_source=questdb";

const LOGO: &str = "/img/pages/customers/logos/counterflow.svg";
const DASHBOARD: &str = "/img/pages/case-study/counterflow/dashboard.png";
const TRAFFIC_OVERVIEW: &str = "/img/pages/case-study/counterflow/traffic-overview.jpg";
const DPD_DIAGRAM: &str = "/img/pages/case-study/counterflow/threateye_dpd.png";
const IP_FILTER: &str = "/img/pages/case-study/counterflow/threateye_ip_filter.png";

/// Render the complete case-study page.
///
/// Takes no input; always succeeds; always produces the same document.
pub fn render() -> Markup {
    PageLayout::new(TITLE, DESCRIPTION, CANONICAL_PATH).wrap(html! {
        (render_jumbotron())
        (render_outcomes())
        (render_intro_card())
        (render_narrative())
    })
}

fn render_jumbotron() -> Markup {
    html! {
        section class=(classes([
            SectionCss::section(),
            SectionCss::center(),
            JumbotronCss::jumbotron(),
        ])) {
            div class=(JumbotronCss::summary()) {
                div class=(JumbotronCss::header()) {
                    (Button::plain(PARTNER_URL, html! {
                        (Img::new(LOGO, "Counterflow AI logo")
                            .class(JumbotronCss::logo())
                            .width(150)
                            .height(65))
                    }))
                    span class=(JumbotronCss::name()) { "Case study" }
                }
                h1 class=(SectionCss::title()) {
                    "QuestDB powers analytics in Counterflow’s network security suite"
                }
                p class=(classes([SectionCss::subtitle(), JumbotronCss::description()])) {
                    "QuestDB is used by Counterflow AI as a time series database for \
                     storing network packet data analyzed by their real-time threat \
                     detection engine."
                }
            }

            div class=(JumbotronCss::banner()) {
                (Img::new(
                    DASHBOARD,
                    "The web-based dashboard for Counterflow AI's ThreatEye network security system",
                )
                .width(900)
                .height(170))
            }
        }
    }
}

fn render_outcomes() -> Markup {
    html! {
        section class=(classes([SectionCss::section(), SectionCss::odd()])) {
            div class=(classes([SectionCss::inner(), OutcomeCss::wrapper()])) {
                @for outcome in &OUTCOMES {
                    p class=(OutcomeCss::outcome()) {
                        (Img::new(outcome.icon.path(), outcome.icon.alt())
                            .class(OutcomeCss::icon()))
                        (outcome.label)
                    }
                }
            }
        }
    }
}

fn render_intro_card() -> Markup {
    html! {
        section class=(classes([SectionCss::section(), CardCss::card()])) {
            p class=(CardCss::title()) {
                "CounterFlow AI is a cybersecurity software company offering an AIOps \
                 platform for network forensics. Their flagship product, ThreatEye, \
                 integrates advanced security technologies into a streaming machine \
                 learning pipeline to identify network faults, anomalies and threats at \
                 wire speed."
            }

            p class=(CardCss::subtitle()) {
                "In this case study, VP Product Development Randy Caldejon describes \
                 how and why QuestDB is relied upon within high-performance network \
                 security systems developed by Counterflow AI."
            }
        }
    }
}

fn render_narrative() -> Markup {
    html! {
        section class=(SectionCss::section()) {
            div class=(classes(["markdown", SectionCss::inner(), SectionCss::column()])) {
                (Img::new(
                    TRAFFIC_OVERVIEW,
                    "Encrypted traffic is growing, SSL is nearly obsolete, and malware is hidden within encryption",
                )
                .class(ChartCss::chart())
                .width(791)
                .height(433))
                h3 { "Encrypted traffic analysis for network security" }
                p class="font-size--large" {
                    "Encrypted internet traffic has increased from around 50% in 2014 to \
                     between 80% and 90% today. Alongside this rise in encrypted traffic \
                     over HTTPS, the recent introduction of new protocols such as DNS \
                     over HTTPS and TLS 1.3 means that network defenders are faced with \
                     dramatically reduced server identity and content visibility. Our \
                     security offering allows LiveAction partners to gain end-to-end \
                     network visibility into the nature of this traffic using Encrypted \
                     Traffic Analysis (ETA)."
                }
                p class="font-size--large" {
                    "ETA provides techniques to gain insight into network behavior \
                     despite encryption while protecting user privacy. It combines Deep \
                     Packet Dynamics with machine learning to identify malicious patterns \
                     in network activity. The benefit of this approach is that it can \
                     scale with continued growth in network traffic and increased use of \
                     encrypted protocols despite having no visibility into the content of \
                     the exchanges."
                }
                (Img::new(
                    DPD_DIAGRAM,
                    "A diagram showing six patterns of network traffic highlighted by Deep Packet Dynamics",
                )
                .class(ChartCss::chart())
                .width(800)
                .height(433))

                h3 { "Analytics to process millions of events per second" }
                p class="font-size--large" {
                    "ThreatEye NV is powered by a streaming machine learning engine (MLE) \
                     that ingests the high-fidelity flow data generated by its software \
                     probes. We use this to provide end-to-end visibility into the nature \
                     of network traffic using real-time inferences in combination with \
                     Encrypted Traffic Analysis."
                }
                p class="font-size--large" {
                    "Distinct from batch processing, streaming ML is powered by analyzers \
                     designed to inspect network traffic without multiple passes over the \
                     data stream. The streaming nature of this solution means that we \
                     have to process millions of events per second."
                }
                h3 { "Why we chose QuestDB for time series analytics" }
                p class="font-size--large" {
                    "We’re typically executing 25k to 100k inserts per second, depending \
                     on the size of the customer and the network activity. We started \
                     with InfluxDB as our central time series database, but we quickly \
                     started hitting performance issues with scalability in production \
                     environments, and we needed to find a practical alternative. After \
                     InfluxDB, we tried TimescaleDB, which was reasonable for \
                     performance, but the database configuration was inconvenient for us \
                     and the system had a poor footprint."
                }

                p class="font-size--large" {
                    "When we tried QuestDB, importing data over CSV was orders of \
                     magnitude faster than the other time series databases we used \
                     before. Our tools export either JSON or CSV, which means that a \
                     RESTful API to import and export data allows for seamless \
                     interfacing with the rest of our technology stack."
                }

                h3 { "Why performance matters for streaming data scenarios" }
                p class="font-size--large" {
                    "We’re analyzing over 150 features of network flows, and our \
                     customers want to see common aggregations such as "
                    b { "top-n clients" }
                    " consuming data on the network. SQL compatibility makes this easy \
                     to calculate in QuestDB, quick to verify in the web console, or \
                     visualize with Grafana using Postgres wire."
                }
                p class="font-size--large" {
                    "Our solution runs in hybrid-cloud deployments and needs to scale up \
                     to 40Gbps worth of inspected network data. High-performance is \
                     critical to ensure scalable and reliable analytics when deploying in \
                     high-throughput scenarios such as enterprise networks."
                }

                (Img::new(
                    IP_FILTER,
                    "The web-based dashboard for Counterflow AI’s ThreatEye network security system",
                )
                .class(ChartCss::chart())
                .width(800)
                .height(433))

                (PullQuote::new(
                    "QuestDB is impressive and stands out as a superior option. We use \
                     it as the basis of our time series analytics for network threat \
                     detection.",
                    "Randy Caldejon, VP Product Development at Counterflow AI",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect the full tag text of every `<img>` in a document.
    fn img_tags(doc: &str) -> Vec<&str> {
        doc.match_indices("<img")
            .map(|(start, _)| {
                let end = doc[start..].find('>').expect("unclosed img tag") + start;
                &doc[start..=end]
            })
            .collect()
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render().into_string(), render().into_string());
    }

    #[test]
    fn test_metadata_literals() {
        let doc = render().into_string();
        assert_eq!(doc.matches("<title>").count(), 1);
        assert!(doc.contains(&format!("<title>{TITLE}</title>")));
        assert_eq!(doc.matches(r#"name="description""#).count(), 1);
        assert!(doc.contains(DESCRIPTION));
    }

    #[test]
    fn test_hero_heading() {
        let doc = render().into_string();
        assert!(doc.contains(
            "QuestDB powers analytics in Counterflow’s network security suite"
        ));
    }

    #[test]
    fn test_first_outcome_label() {
        assert_eq!(
            OUTCOMES[0].label,
            "Cost reduction due to lower resource consumption"
        );
        assert_eq!(OUTCOMES[0].icon, OutcomeIcon::Dollar);
    }

    #[test]
    fn test_outcomes_render_in_declared_order() {
        let doc = render().into_string();
        assert_eq!(doc.matches(r#"<p class="outcome">"#).count(), OUTCOMES.len());

        let mut last = 0;
        for outcome in &OUTCOMES {
            let at = doc.find(outcome.label).expect("outcome label missing");
            assert!(at > last, "outcome out of order: {}", outcome.label);
            last = at;
            assert!(doc.contains(outcome.icon.path()), "icon missing: {:?}", outcome.icon);
        }
    }

    #[test]
    fn test_every_image_has_alt_text() {
        let doc = render().into_string();
        let tags = img_tags(&doc);
        assert!(!tags.is_empty());
        for tag in tags {
            let alt_start = tag.find(r#"alt=""#).expect("img without alt");
            let rest = &tag[alt_start + 5..];
            let alt = &rest[..rest.find('"').expect("unterminated alt")];
            assert!(!alt.is_empty(), "empty alt text in {tag}");
        }
    }

    #[test]
    fn test_partner_link_is_well_formed() {
        let doc = render().into_string();
        assert!(doc.contains(&format!(r#"href="{PARTNER_URL}""#)));

        let parsed = url::Url::parse(PARTNER_URL).expect("partner URL parses");
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host_str(), Some("www.counterflow.ai"));
    }

    #[test]
    fn test_canonical_path() {
        let doc = render().into_string();
        assert!(doc.contains(r#"rel="canonical" href="https://questdb.io/case-study/counterflow/""#));
    }
}
