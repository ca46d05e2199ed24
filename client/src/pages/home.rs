//! Landing page for signed-in users.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::util::routes::{ALL_JOBS_PATH, REGISTER_PATH};

const FEATURES: [(&str, &str, &str); 3] = [
    ("🔍", "Verified Listings", "Only genuine employers and job posts."),
    ("⚡", "Easy Apply", "One-click apply to multiple jobs."),
    ("📈", "Career Guidance", "Resources to grow your career."),
];

const CATEGORIES: [(&str, &str); 8] = [
    ("💻", "Tech"),
    ("📢", "Marketing"),
    ("🎨", "Design"),
    ("🤝", "Support"),
    ("💰", "Finance"),
    ("📚", "Education"),
    ("🏥", "Healthcare"),
    ("⚙️", "Engineering"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home__hero">
                <h1>"Find Your Next Opportunity"</h1>
                <p>"Join thousands of professionals hiring or applying through our platform."</p>
                <div class="home__cta">
                    <a class="btn btn--primary" href=ALL_JOBS_PATH>"Explore Jobs"</a>
                    <a class="btn" href=REGISTER_PATH>"Sign Up Free"</a>
                </div>
            </header>

            <section class="home__section">
                <h2>"Why Choose Us"</h2>
                <p>"We provide the best platform to connect job seekers with top employers"</p>
                <div class="home__features">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, desc)| {
                            view! {
                                <div class="feature-card">
                                    <span class="feature-card__icon">{icon}</span>
                                    <h3>{title}</h3>
                                    <p>{desc}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home__section">
                <h2>"Popular Categories"</h2>
                <p>"Find jobs in your field of expertise"</p>
                <div class="home__categories">
                    {CATEGORIES
                        .into_iter()
                        .map(|(icon, name)| {
                            view! {
                                <div class="category-chip">
                                    <span>{icon}</span>
                                    <span>{name}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home__section home__section--cta">
                <h2>"Ready to take the next step?"</h2>
                <a class="btn btn--primary" href=REGISTER_PATH>"Get Started - It's Free!"</a>
            </section>
            <Footer/>
        </div>
    }
}
