use std::rc::Rc;

use common::subject_observer::Subject;
use feeds::mail::{opened, MailSite, Post, PostBoard, Subscriber, Topic};
use log::info;
use mediator::MediatorSet;

const FIRST_ROUND: [(Topic, &str); 3] = [
    (Topic::Music, "Ajda Pekkan is in Izmir!"),
    (Topic::Sports, "Galatasaray lost to Fenerbahce."),
    (Topic::Politics, "Theresa May has resigned."),
];

const SECOND_ROUND: [(Topic, &str); 3] = [
    (Topic::Music, "Tarkan is in Izmir!"),
    (Topic::Sports, "Galatasaray lost to Besiktas."),
    (Topic::Politics, "Boris Johnson has resigned."),
];

const THIRD_ROUND: [(Topic, &str); 3] = [
    (Topic::Music, "Fazil Say is in Izmir!"),
    (Topic::Sports, "Galatasaray lost to TrabzonSpor."),
    (Topic::Politics, "Professor Ufuk is now prime minister!"),
];

fn publish(site: &mut MailSite, posts: &[(Topic, &str)]) {
    for &(topic, message) in posts {
        site.new_post(Post::new(topic, message));
    }
}

/// Posts three rounds on one site while subscribers drop some of their topics.
pub fn run(site_name: &str) -> Vec<Rc<Subscriber>> {
    let mediators = Rc::new(MediatorSet::every());
    let music_fan = Subscriber::new("MusicFan");
    let sports_fan = Subscriber::new("SportsFan");
    let politics_and_sports_fan = Subscriber::new("PoliticsAndSportsFan");
    let everything_fan = Subscriber::new("EverythingFan");

    let mut site = opened(site_name, &mediators);
    site.attach(music_fan.clone(), Some(Topic::Music));
    site.attach(sports_fan.clone(), Some(Topic::Sports));
    site.attach(politics_and_sports_fan.clone(), Some(Topic::Politics));
    site.attach(politics_and_sports_fan.clone(), Some(Topic::Sports));
    site.attach(everything_fan.clone(), None);
    publish(&mut site, &FIRST_ROUND);

    info!("{} no longer wants any notification", everything_fan.name());
    site.detach(&everything_fan, None);
    publish(&mut site, &SECOND_ROUND);

    info!(
        "{} no longer wants {} notifications",
        politics_and_sports_fan.name(),
        Topic::Sports
    );
    site.detach(&politics_and_sports_fan, Some(Topic::Sports));
    publish(&mut site, &THIRD_ROUND);

    vec![music_fan, sports_fan, politics_and_sports_fan, everything_fan]
}
