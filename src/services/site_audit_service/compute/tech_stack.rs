use crate::models::TechStack;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignatureKind {
    Framework,
    Library,
    Cms,
    Server,
}

struct Signature {
    name: &'static str,
    kind: SignatureKind,
    pattern: Regex,
}

// (name, kind, case-insensitive pattern) matched against request URLs and markup
const SIGNATURE_TABLE: &[(&str, SignatureKind, &str)] = &[
    ("React", SignatureKind::Framework, r"\breact(-dom)?\b|data-reactroot"),
    ("Angular", SignatureKind::Framework, r"\bangular\b|ng-version="),
    ("Vue.js", SignatureKind::Framework, r"\bvue\b|data-v-[0-9a-f]{6,}"),
    ("Next.js", SignatureKind::Framework, r"/_next/|__NEXT_DATA__"),
    ("Nuxt", SignatureKind::Framework, r"/_nuxt/|__NUXT__"),
    ("Svelte", SignatureKind::Framework, r"\bsvelte\b|/_app/immutable/"),
    ("jQuery", SignatureKind::Library, r"jquery"),
    ("Bootstrap", SignatureKind::Library, r"bootstrap"),
    ("Lodash", SignatureKind::Library, r"lodash"),
    ("Tailwind CSS", SignatureKind::Library, r"tailwind"),
    ("Font Awesome", SignatureKind::Library, r"font-?awesome"),
    (
        "Google Analytics",
        SignatureKind::Library,
        r"google-analytics\.com|/gtag/js",
    ),
    (
        "Google Tag Manager",
        SignatureKind::Library,
        r"googletagmanager\.com/gtm\.js",
    ),
    ("WordPress", SignatureKind::Cms, r"/wp-content/|/wp-includes/"),
    ("Shopify", SignatureKind::Cms, r"cdn\.shopify\.com|/cdn/shop/"),
    ("Drupal", SignatureKind::Cms, r"/sites/default/files/|drupal"),
    (
        "Wix",
        SignatureKind::Cms,
        r"static\.wixstatic\.com|static\.parastorage\.com",
    ),
    ("Squarespace", SignatureKind::Cms, r"squarespace"),
    ("Joomla", SignatureKind::Cms, r"/media/jui/|/components/com_"),
    ("Cloudflare", SignatureKind::Server, r"/cdn-cgi/"),
    ("Vercel", SignatureKind::Server, r"/_vercel/"),
    ("Netlify", SignatureKind::Server, r"netlify"),
];

static SIGNATURES: LazyLock<Vec<Signature>> = LazyLock::new(|| {
    SIGNATURE_TABLE
        .iter()
        .filter_map(|(name, kind, pattern)| {
            Regex::new(&format!("(?i){}", pattern))
                .ok()
                .map(|pattern| Signature {
                    name: *name,
                    kind: *kind,
                    pattern,
                })
        })
        .collect()
});

/// Best-effort technology fingerprinting. Feed it request URLs, markup or
/// response headers, then call [`TechStackDetector::finish`]. Misses are
/// expected; a signature only ever adds to the result.
///
/// Audits only have request URLs to offer (the `network-requests` audit),
/// so there `server` comes from hosting fingerprints such as `/cdn-cgi/`.
/// [`observe_text`](Self::observe_text) and
/// [`observe_header`](Self::observe_header) serve callers that fetched the
/// page themselves.
#[derive(Debug, Default)]
pub struct TechStackDetector {
    stack: TechStack,
}

impl TechStackDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_url(&mut self, url: &str) -> &mut Self {
        self.observe_text(url)
    }

    /// Markup or any other free text (script tags, meta generator lines).
    pub fn observe_text(&mut self, text: &str) -> &mut Self {
        for signature in SIGNATURES.iter() {
            if signature.pattern.is_match(text) {
                self.record(signature.kind, signature.name);
            }
        }
        self
    }

    pub fn observe_header(&mut self, name: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if value.is_empty() {
            return self;
        }
        match name.trim().to_ascii_lowercase().as_str() {
            "server" => {
                // "nginx/1.25.3" -> "nginx"
                let product = value.split('/').next().unwrap_or(value).trim();
                self.record(SignatureKind::Server, product);
            }
            "x-powered-by" | "x-generator" => {
                self.observe_text(value);
            }
            "x-vercel-id" => self.record(SignatureKind::Server, "Vercel"),
            "x-nf-request-id" => self.record(SignatureKind::Server, "Netlify"),
            "cf-ray" => self.record(SignatureKind::Server, "Cloudflare"),
            _ => {}
        }
        self
    }

    pub fn finish(self) -> TechStack {
        self.stack
    }

    // First server and CMS seen win
    fn record(&mut self, kind: SignatureKind, name: &str) {
        match kind {
            SignatureKind::Framework => {
                self.stack.frameworks.insert(name.to_string());
            }
            SignatureKind::Library => {
                self.stack.libraries.insert(name.to_string());
            }
            SignatureKind::Cms => {
                self.stack.cms.get_or_insert_with(|| name.to_string());
            }
            SignatureKind::Server => {
                self.stack.server.get_or_insert_with(|| name.to_string());
            }
        }
    }
}

/// Runs the detector over a list of request URLs.
pub fn detect_tech_stack<'a>(urls: impl IntoIterator<Item = &'a str>) -> TechStack {
    let mut detector = TechStackDetector::new();
    for url in urls {
        detector.observe_url(url);
    }
    detector.finish()
}
