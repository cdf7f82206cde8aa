//! Static site content: blog posts and portfolio projects.

#[derive(Debug, PartialEq, Eq)]
pub struct BlogPostRecord {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    /// Trusted HTML authored with the site.
    pub body_html: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
}

/// Read-only source of blog posts.
pub trait PostCatalog {
    fn posts(&self) -> &[BlogPostRecord];

    fn find(&self, slug: &str) -> Option<&BlogPostRecord> {
        self.posts().iter().find(|post| post.slug == slug)
    }
}

/// Outcome of resolving a `/blog/:slug` request.
#[derive(Debug, PartialEq, Eq)]
pub enum PostView<'a> {
    Found(&'a BlogPostRecord),
    NotFound,
}

pub fn lookup_post<'a, C: PostCatalog + ?Sized>(catalog: &'a C, slug: &str) -> PostView<'a> {
    match catalog.find(slug) {
        Some(post) => PostView::Found(post),
        None => PostView::NotFound,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticCatalog;

impl PostCatalog for StaticCatalog {
    fn posts(&self) -> &[BlogPostRecord] {
        BLOG_POSTS
    }
}

impl StaticCatalog {
    pub fn projects(&self) -> &'static [ProjectRecord] {
        PROJECTS
    }
}

const BLOG_POSTS: &[BlogPostRecord] = &[
    BlogPostRecord {
        slug: "llm-security-challenges",
        title: "The Hidden Security Risks in Large Language Models",
        date: "2024-01-25",
        category: "Security",
        read_time: "8 min read",
        summary: "Exploring the critical security challenges in LLM implementation, from prompt injection attacks to model theft, and how organizations can protect their AI systems.",
        image: "/blog-images/llm-security.jpg",
        body_html: r#"
<h2>The Security Blind Spot in AI Innovation</h2>
<p>As organizations rush to integrate Large Language Models into their products, a gap is opening between innovation and security. These models bring capabilities that traditional security frameworks were never designed to reason about.</p>
<h2>Prompt Injection: The New SQL Injection</h2>
<p>Prompt injection is to LLM applications what SQL injection was to early web applications: untrusted input reaching a trusted interpreter.</p>
<code>// Vulnerable: user input flows straight into the model
const response = await llm.generate({ prompt: userInput });

// Safer: validate and constrain before generation
const response = await llm.generate({
  prompt: validateAndSanitizePrompt(userInput),
  safetySettings: securityConfig,
});</code>
<h2>Plugin Vulnerabilities</h2>
<ul>
  <li>Unauthorized access to backend systems</li>
  <li>Data exfiltration through seemingly innocent prompts</li>
  <li>Escalation of privileges through plugin chains</li>
</ul>
<h2>Model Theft and IP Protection</h2>
<ul>
  <li>Encrypted model storage and transmission</li>
  <li>Access control and authentication for model APIs</li>
  <li>Monitoring for unusual query patterns and rate limiting</li>
</ul>
<h2>Conclusion</h2>
<p>Securing LLMs is an ongoing discipline. Treat every prompt as untrusted input, scope every plugin narrowly and watch how your models are being queried.</p>
"#,
    },
    BlogPostRecord {
        slug: "modern-full-stack-architecture",
        title: "Modern Full-Stack Architecture in 2024",
        date: "2024-01-10",
        category: "Development",
        read_time: "6 min read",
        summary: "Exploring the synergy between Angular, React, and Vue.js for frontend, coupled with Python and Node.js backends. Real-world examples from enterprise applications.",
        image: "/blog-images/modern-architecture.jpg",
        body_html: r#"
<h2>The Evolution of Modern Architecture</h2>
<p>Full-stack development changed markedly in 2024. Applications grew more complex and expectations rose with them, pushing teams towards architectures that put security, scalability and developer experience first.</p>
<h2>Security First: The New Normal</h2>
<p>Zero-trust architecture is now the baseline: every layer authenticates, from API gateways down to service-to-service calls.</p>
<code>const secureEndpoint = async (req, res) => {
  if (!await validateToken(req.headers.authorization)) {
    return res.status(401).json({ error: 'Unauthorized' });
  }
};</code>
<h2>The Rise of Intelligent Architecture</h2>
<ul>
  <li>Scaling ahead of predicted user behavior</li>
  <li>ML-assisted query planning</li>
  <li>Real-time threat detection</li>
</ul>
<h2>Key Takeaways</h2>
<p>Pick boring, well-understood foundations, secure them by default and spend your novelty budget where users notice it.</p>
"#,
    },
    BlogPostRecord {
        slug: "aws-cost-optimization",
        title: "AWS Cost Optimization Techniques",
        date: "2023-12-28",
        category: "Cloud",
        read_time: "7 min read",
        summary: "Strategic approaches to reducing cloud costs while maintaining high performance. Real examples of achieving significant savings through smart architecture.",
        image: "/blog-images/aws-optimization.jpg",
        body_html: r#"
<h2>Strategic Cost Management</h2>
<p>AWS cost optimization combines architectural decisions with operational discipline. The goal is lower spend without giving up performance.</p>
<h2>Resource Optimization</h2>
<ul>
  <li>Instance right-sizing based on CloudWatch metrics</li>
  <li>Spot Instances for non-critical workloads</li>
  <li>Auto-scaling with precise target tracking</li>
  <li>Reserved Instance planning and management</li>
</ul>
<h2>Implementation Example</h2>
<code>resource "aws_autoscaling_group" "web" {
  name             = "web-asg"
  desired_capacity = 2
  max_size         = 4
  min_size         = 1
}</code>
<h2>Storage Optimization</h2>
<p>Lifecycle policies that move cold objects to cheaper storage classes are some of the easiest savings available.</p>
<h2>Real Results</h2>
<p>Applied together, these practices routinely cut monthly bills by a third while keeping latency targets intact.</p>
"#,
    },
];

const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Cirium Data Pipeline Optimization",
        description: "Led optimization of data pipelines processing 200M+ daily events, improving aviation analytics efficiency by 40%.",
        tech: &["Python", "AWS", "PySpark", "PostgreSQL"],
        image: "/cirium-project.jpg",
    },
    ProjectRecord {
        title: "Healthcare AI Platform",
        description: "Developed HIPAA-compliant healthcare platform with integrated AI for patient care management.",
        tech: &["React", "Node.js", "TensorFlow", "AWS"],
        image: "/healthcare-ai.jpg",
    },
    ProjectRecord {
        title: "FIRST Robotics Mentorship",
        description: "Mentored young developers in coding best practices and collaborative development.",
        tech: &["Python", "Java", "Git", "Agile"],
        image: "/robotics-mentor.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FakeCatalog(Vec<BlogPostRecord>);

    impl PostCatalog for FakeCatalog {
        fn posts(&self) -> &[BlogPostRecord] {
            &self.0
        }
    }

    fn record(slug: &'static str) -> BlogPostRecord {
        BlogPostRecord {
            slug,
            title: "Title",
            date: "2024-01-01",
            category: "Test",
            read_time: "1 min read",
            summary: "Summary",
            image: "/image.jpg",
            body_html: "<p>Body</p>",
        }
    }

    #[test]
    fn slugs_are_unique() {
        let posts = StaticCatalog.posts();
        let slugs: HashSet<&str> = posts.iter().map(|post| post.slug).collect();

        assert_eq!(slugs.len(), posts.len());
    }

    #[test]
    fn known_slug_is_found() {
        match lookup_post(&StaticCatalog, "aws-cost-optimization") {
            PostView::Found(post) => assert_eq!(post.title, "AWS Cost Optimization Techniques"),
            PostView::NotFound => panic!("expected the AWS post"),
        }
    }

    #[test]
    fn unknown_slugs_render_not_found() {
        for slug in ["", "missing", "AWS-COST-OPTIMIZATION", "aws-cost-optimization/", "../etc"] {
            assert_eq!(lookup_post(&StaticCatalog, slug), PostView::NotFound);
        }
    }

    #[test]
    fn substituted_catalog_is_consulted() {
        let catalog = FakeCatalog(vec![record("only-post")]);

        assert!(matches!(lookup_post(&catalog, "only-post"), PostView::Found(_)));
        assert_eq!(lookup_post(&catalog, "llm-security-challenges"), PostView::NotFound);
    }

    #[test]
    fn every_post_has_a_body_and_metadata() {
        for post in StaticCatalog.posts() {
            assert!(post.body_html.contains("<h2>"), "{} has no sections", post.slug);
            assert!(post.read_time.ends_with("min read"));
            assert!(!post.category.is_empty());
        }
    }

    #[test]
    fn projects_carry_tech_tags() {
        let projects = StaticCatalog.projects();

        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|project| !project.tech.is_empty()));
    }
}
