// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bundled portfolio corpus.
//!
//! The site's searchable content lives in a literal table of `RecordDef`s.
//! Because the table is a `const`, the contracts in `verify::contracts` run
//! over it at compile time: a duplicate id or an empty title stops the build.
//! `ContentIndex::bundled()` turns the table into owned records once, on
//! first use, and keeps it for the life of the process.
//!
//! `target` values are the page identifiers the navigation component routes
//! on: `home`, `publications`, `teaching`, `blog`, `cv`, `stack`.

use crate::types::{ContentIndex, Kind, Metadata, Record};
use crate::verify::contracts::{ids_are_unique, required_fields_present};
use std::sync::LazyLock;

/// Display metadata in const-friendly form.
#[derive(Debug, Clone, Copy)]
pub struct MetaDef {
    pub date: Option<&'static str>,
    pub journal: Option<&'static str>,
    pub year: Option<u16>,
    pub tags: &'static [&'static str],
}

impl MetaDef {
    pub const NONE: MetaDef = MetaDef {
        date: None,
        journal: None,
        year: None,
        tags: &[],
    };

    fn to_metadata(self) -> Option<Metadata> {
        let metadata = Metadata {
            date: self.date.map(str::to_string),
            journal: self.journal.map(str::to_string),
            year: self.year,
            tags: owned_tags(self.tags),
        };
        (!metadata.is_empty()).then_some(metadata)
    }
}

/// A record as written in the literal table.
///
/// An empty `tags` slice means "no tags" and becomes `None` on the record.
#[derive(Debug, Clone, Copy)]
pub struct RecordDef {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub kind: Kind,
    pub target: &'static str,
    pub excerpt: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub meta: MetaDef,
}

impl RecordDef {
    pub fn to_record(&self) -> Record {
        Record {
            id: self.id.to_string(),
            title: self.title.to_string(),
            content: self.content.to_string(),
            kind: self.kind,
            target: self.target.to_string(),
            excerpt: self.excerpt.map(str::to_string),
            tags: owned_tags(self.tags),
            metadata: self.meta.to_metadata(),
        }
    }
}

fn owned_tags(tags: &[&str]) -> Option<Vec<String>> {
    (!tags.is_empty()).then(|| tags.iter().map(|t| t.to_string()).collect())
}

// ============================================================================
// COMPILE-TIME VALIDATION
// ============================================================================

const _: () = {
    assert!(ids_are_unique(PORTFOLIO), "bundled corpus has a duplicate id");
    assert!(
        required_fields_present(PORTFOLIO),
        "bundled corpus has a record with an empty id, title or content"
    );
};

static BUNDLED: LazyLock<ContentIndex> = LazyLock::new(|| {
    let index = ContentIndex::from_trusted(PORTFOLIO.iter().map(RecordDef::to_record).collect());
    tracing::debug!(records = index.len(), "bundled corpus ready");
    index
});

impl ContentIndex {
    /// The site's own content, built once and shared for the process lifetime.
    pub fn bundled() -> &'static ContentIndex {
        &BUNDLED
    }
}

// ============================================================================
// THE CORPUS
// ============================================================================

pub const PORTFOLIO: &[RecordDef] = &[
    // ---- pages ------------------------------------------------------------
    RecordDef {
        id: "page-home",
        title: "Home",
        content: "Welcome. I am an assistant professor of economics working on \
                  macroeconomics, monetary policy and household finance. about me \
                  biography research interests contact email office",
        kind: Kind::Page,
        target: "home",
        excerpt: Some("Research, teaching and writing in macroeconomics"),
        tags: &["About", "Contact"],
        meta: MetaDef::NONE,
    },
    RecordDef {
        id: "page-publications",
        title: "Publications",
        content: "Peer-reviewed articles, working papers and work in progress. \
                  papers research journal articles preprints",
        kind: Kind::Page,
        target: "publications",
        excerpt: Some("Published papers and working papers"),
        tags: &["Research", "Papers"],
        meta: MetaDef::NONE,
    },
    RecordDef {
        id: "page-teaching",
        title: "Teaching",
        content: "Courses taught at undergraduate and graduate level, with \
                  syllabi, lecture notes and problem sets. classes courses students",
        kind: Kind::Page,
        target: "teaching",
        excerpt: Some("Courses, syllabi and lecture materials"),
        tags: &["Courses", "Lectures"],
        meta: MetaDef::NONE,
    },
    RecordDef {
        id: "page-blog",
        title: "Blog",
        content: "Occasional posts on economics, research methods, computation \
                  and academic life. writing articles posts essays",
        kind: Kind::Page,
        target: "blog",
        excerpt: Some("Notes on economics and research"),
        tags: &["Writing"],
        meta: MetaDef::NONE,
    },
    RecordDef {
        id: "page-cv",
        title: "Curriculum Vitae",
        content: "Full CV: education, appointments, grants, awards, refereeing \
                  and service. resume cv experience employment",
        kind: Kind::Page,
        target: "cv",
        excerpt: Some("Education, appointments and awards"),
        tags: &["CV", "Resume"],
        meta: MetaDef::NONE,
    },
    RecordDef {
        id: "page-stack",
        title: "Document Stack",
        content: "A stack of slides, referee reports, replication packages and \
                  other documents. files downloads pdf slides replication",
        kind: Kind::Page,
        target: "stack",
        excerpt: Some("Slides, replication files and other documents"),
        tags: &["Documents", "Slides"],
        meta: MetaDef::NONE,
    },
    // ---- publications -----------------------------------------------------
    RecordDef {
        id: "pub-forward-guidance",
        title: "Forward Guidance and Household Expectations",
        content: "We use survey data to measure how central bank forward guidance \
                  moves household inflation expectations and consumption plans. \
                  monetary policy communication expectations survey",
        kind: Kind::Publication,
        target: "publications",
        excerpt: Some("Survey evidence on how households hear central banks"),
        tags: &["Monetary Policy", "Expectations"],
        meta: MetaDef {
            date: None,
            journal: Some("Journal of Monetary Economics"),
            year: Some(2023),
            tags: &["with A. Ruiz"],
        },
    },
    RecordDef {
        id: "pub-heterogeneous-mpc",
        title: "Heterogeneous Marginal Propensities to Consume",
        content: "A heterogeneous agent model with liquid and illiquid wealth \
                  matches the distribution of marginal propensities to consume \
                  observed in administrative data. HANK fiscal transfers",
        kind: Kind::Publication,
        target: "publications",
        excerpt: Some("Why wealthy hand-to-mouth households matter for fiscal policy"),
        tags: &["Household Finance", "Fiscal Policy", "HANK"],
        meta: MetaDef {
            date: None,
            journal: Some("American Economic Journal: Macroeconomics"),
            year: Some(2022),
            tags: &[],
        },
    },
    RecordDef {
        id: "pub-bayesian-dsge",
        title: "Estimating DSGE Models with Occasionally Binding Constraints",
        content: "We develop a particle filter for DSGE models with a zero lower \
                  bound on nominal interest rates and estimate it on US data. \
                  Bayesian estimation econometrics computation",
        kind: Kind::Publication,
        target: "publications",
        excerpt: Some("A particle filter for the zero lower bound"),
        tags: &["DSGE", "Econometrics"],
        meta: MetaDef {
            date: None,
            journal: Some("Review of Economic Dynamics"),
            year: Some(2021),
            tags: &["with J. Okafor"],
        },
    },
    RecordDef {
        id: "pub-housing-credit",
        title: "Housing Credit Cycles",
        content: "Mortgage credit standards amplify house price booms. We document \
                  the pattern across regions and build a model with collateral \
                  constraints. real estate mortgages leverage",
        kind: Kind::Publication,
        target: "publications",
        excerpt: Some("Credit standards and house price booms"),
        tags: &["Housing", "Household Finance"],
        meta: MetaDef {
            date: None,
            journal: Some("Working paper"),
            year: Some(2024),
            tags: &[],
        },
    },
    RecordDef {
        id: "pub-inflation-inequality",
        title: "Inflation Inequality over the Business Cycle",
        content: "Households face different inflation rates depending on what they \
                  buy. We measure the gap using scanner data and study how it \
                  varies with the business cycle. prices distribution",
        kind: Kind::Publication,
        target: "publications",
        excerpt: None,
        tags: &["Inflation", "Inequality"],
        meta: MetaDef {
            date: None,
            journal: Some("Economic Journal"),
            year: Some(2020),
            tags: &[],
        },
    },
    // ---- blog -------------------------------------------------------------
    RecordDef {
        id: "blog-understanding-dsge",
        title: "Understanding DSGE Models",
        content: "A gentle introduction to DSGE Dynamic Stochastic General \
                  Equilibrium models: households, firms, a central bank, and how \
                  they fit together. new keynesian calibration",
        kind: Kind::Blog,
        target: "blog",
        excerpt: Some("What is inside the models central banks use"),
        tags: &["Macroeconomics", "DSGE", "Policy"],
        meta: MetaDef {
            date: Some("2024-03-12"),
            journal: None,
            year: None,
            tags: &[],
        },
    },
    RecordDef {
        id: "blog-julia-for-economists",
        title: "Julia for Economists",
        content: "Why I moved my research code from Matlab to Julia, with notes \
                  on performance, packages and reproducibility. programming \
                  computation code",
        kind: Kind::Blog,
        target: "blog",
        excerpt: Some("Notes from switching research code to Julia"),
        tags: &["Computation", "Programming"],
        meta: MetaDef {
            date: Some("2023-11-02"),
            journal: None,
            year: None,
            tags: &[],
        },
    },
    RecordDef {
        id: "blog-job-market",
        title: "Notes on the Economics Job Market",
        content: "Advice for PhD students going on the academic job market: the \
                  job market paper, interviews, flyouts and offers. career phd \
                  students academia",
        kind: Kind::Blog,
        target: "blog",
        excerpt: Some("Practical advice for job market candidates"),
        tags: &["Career", "Academia"],
        meta: MetaDef {
            date: Some("2023-09-18"),
            journal: None,
            year: None,
            tags: &[],
        },
    },
    RecordDef {
        id: "blog-monetary-transmission",
        title: "How Monetary Policy Reaches Households",
        content: "Interest rate changes work through mortgages, deposits, labor \
                  income and asset prices. A tour of the monetary transmission \
                  mechanism. central bank rates",
        kind: Kind::Blog,
        target: "blog",
        excerpt: Some("A tour of the transmission mechanism"),
        tags: &["Monetary Policy", "Households"],
        meta: MetaDef {
            date: Some("2024-06-05"),
            journal: None,
            year: None,
            tags: &[],
        },
    },
    RecordDef {
        id: "blog-replication",
        title: "Writing Replication Packages",
        content: "What makes a replication package easy to run: folder layout, \
                  master scripts, data availability statements and version \
                  control. reproducibility code data",
        kind: Kind::Blog,
        target: "blog",
        excerpt: None,
        tags: &["Reproducibility"],
        meta: MetaDef {
            date: Some("2022-12-01"),
            journal: None,
            year: None,
            tags: &[],
        },
    },
    // ---- teaching ---------------------------------------------------------
    RecordDef {
        id: "teach-intermediate-macro",
        title: "Intermediate Macroeconomics",
        content: "Undergraduate course on growth, business cycles, fiscal and \
                  monetary policy. Solow model, IS-LM, Phillips curve. econ \
                  syllabus lectures problem sets",
        kind: Kind::Teaching,
        target: "teaching",
        excerpt: Some("Undergraduate macro, spring semester"),
        tags: &["Undergraduate", "Macroeconomics"],
        meta: MetaDef::NONE,
    },
    RecordDef {
        id: "teach-phd-macro",
        title: "PhD Macroeconomics II",
        content: "Graduate course on dynamic programming, heterogeneous agent \
                  models and DSGE estimation. recursive methods computation \
                  econ syllabus",
        kind: Kind::Teaching,
        target: "teaching",
        excerpt: Some("Second-year graduate macro sequence"),
        tags: &["Graduate", "Macroeconomics", "Computation"],
        meta: MetaDef::NONE,
    },
    RecordDef {
        id: "teach-money-banking",
        title: "Money and Banking",
        content: "Undergraduate course on financial intermediation, central \
                  banking, bank runs and monetary policy implementation. finance \
                  banks credit",
        kind: Kind::Teaching,
        target: "teaching",
        excerpt: Some("Undergraduate elective on banks and central banks"),
        tags: &["Undergraduate", "Banking"],
        meta: MetaDef::NONE,
    },
    RecordDef {
        id: "teach-computational-methods",
        title: "Computational Methods for Economists",
        content: "Short course on numerical methods: root finding, \
                  interpolation, value function iteration and parallel \
                  computing in Julia. programming code workshop",
        kind: Kind::Teaching,
        target: "teaching",
        excerpt: Some("Numerical methods workshop"),
        tags: &["Computation", "Julia"],
        meta: MetaDef::NONE,
    },
];
