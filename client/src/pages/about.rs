//! Public about page.

use leptos::prelude::*;

use crate::components::footer::Footer;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="about__intro">
                <h1>"About JobHunt"</h1>
                <p>
                    "JobHunt connects job seekers with employers. Browse openings, filter by "
                    "type, and publish your own postings in a few clicks."
                </p>
            </section>
            <section class="about__values">
                <h2>"What we care about"</h2>
                <ul>
                    <li>"Genuine listings from real employers"</li>
                    <li>"A simple flow from search to application"</li>
                    <li>"Tools that let hiring teams manage their own posts"</li>
                </ul>
            </section>
            <Footer/>
        </div>
    }
}
