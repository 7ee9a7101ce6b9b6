use std::{cell::RefCell, rc::Rc};

use common::subject_observer::Observer;
use log::info;
use mediator::{MediatorSet, PartitionKey, Publisher, PublisherId};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Topic {
    Music,
    Sports,
    Politics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub topic: Topic,
    pub message: String,
}

impl Post {
    pub fn new(topic: Topic, message: impl Into<String>) -> Self {
        Post {
            topic,
            message: message.into(),
        }
    }
}

impl PartitionKey for Topic {
    /// Latest post of a site, if any was made.
    type Value = Option<Post>;

    fn admits(&self, post: &Option<Post>) -> bool {
        post.as_ref().is_some_and(|post| post.topic == *self)
    }
}

pub type MailSite = Publisher<Topic>;

pub fn opened(name: impl Into<String>, mediators: &Rc<MediatorSet<Topic>>) -> MailSite {
    Publisher::new(name, None, mediators)
}

pub trait PostBoard {
    fn latest_post(&self) -> Option<&Post>;

    fn new_post(&mut self, post: Post);
}

impl PostBoard for MailSite {
    fn latest_post(&self) -> Option<&Post> {
        self.value().as_ref()
    }

    fn new_post(&mut self, post: Post) {
        self.set_value(Some(post));
    }
}

#[derive(Debug, Default)]
struct Inbox {
    site: Option<(PublisherId, String)>,
    message: Option<String>,
    notifications: usize,
}

/// Observer keeping the last message it was told about.
#[derive(Debug)]
pub struct Subscriber {
    name: String,
    inbox: RefCell<Inbox>,
}

impl Subscriber {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Subscriber {
            name: name.into(),
            inbox: RefCell::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn site_id(&self) -> Option<PublisherId> {
        self.inbox.borrow().site.as_ref().map(|(id, _)| *id)
    }

    pub fn site_name(&self) -> Option<String> {
        self.inbox.borrow().site.as_ref().map(|(_, name)| name.clone())
    }

    pub fn message(&self) -> Option<String> {
        self.inbox.borrow().message.clone()
    }

    pub fn notification_count(&self) -> usize {
        self.inbox.borrow().notifications
    }
}

impl Observer<MailSite, Topic> for Subscriber {
    fn update(&self, site: &MailSite, _topic: Topic) {
        let Some(post) = site.latest_post() else {
            return;
        };
        {
            let mut inbox = self.inbox.borrow_mut();
            inbox.site = Some((site.id(), site.symbol().to_string()));
            inbox.message = Some(post.message.clone());
            inbox.notifications += 1;
        }
        info!(
            "Notified {} of {}'s new message: {}",
            self.name,
            site.symbol(),
            post.message
        );
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::{Observer, Subject};
    use common_test::{get_seeded_rng, Recorder};
    use mediator::{MediatorSet, PartitionKey};
    use mockall::mock;
    use rand::{seq::SliceRandom, Rng};
    use strum::IntoEnumIterator;

    use super::{opened, MailSite, Post, PostBoard, Subscriber, Topic};

    mock! {
        Reader {}

        impl Observer<MailSite, Topic> for Reader {
            fn update(&self, source: &MailSite, event: Topic);
        }
    }

    fn topic_mediators() -> Rc<MediatorSet<Topic>> {
        Rc::new(MediatorSet::every())
    }

    #[test]
    fn test_topic_admits() {
        let post = Some(Post::new(Topic::Sports, "Galatasaray lost to Fenerbahce."));

        assert!(Topic::Sports.admits(&post));
        assert!(!Topic::Music.admits(&post));
        assert!(!Topic::Politics.admits(&post));
        assert!(
            Topic::iter().all(|topic| !topic.admits(&None)),
            "Should not admit a site without posts"
        );
    }

    #[test]
    fn test_topic_from_str() {
        assert_eq!(Ok(Topic::Music), "MUSIC".parse::<Topic>());
        assert_eq!(Ok(Topic::Politics), "politics".parse::<Topic>());
        assert!("weather".parse::<Topic>().is_err());
    }

    #[test]
    fn test_new_post_reaches_topic_and_all_subscribers() {
        // Given
        let mediators = topic_mediators();
        let mut yahoo = opened("YAHOO", &mediators);
        let mut music_fan = MockReader::new();
        music_fan
            .expect_update()
            .withf(|site, topic| {
                site.latest_post().map(|post| post.message.as_str())
                    == Some("Ajda Pekkan is in Izmir!")
                    && *topic == Topic::Music
            })
            .times(1)
            .return_const(());
        let mut sports_fan = MockReader::new();
        sports_fan.expect_update().never();
        let everything_fan = Subscriber::new("EverythingFan");
        yahoo.attach(Rc::new(music_fan), Some(Topic::Music));
        yahoo.attach(Rc::new(sports_fan), Some(Topic::Sports));
        yahoo.attach(everything_fan.clone(), None);

        // When
        yahoo.new_post(Post::new(Topic::Music, "Ajda Pekkan is in Izmir!"));

        // Then
        assert_eq!(1, everything_fan.notification_count());
        assert_eq!(
            Some("Ajda Pekkan is in Izmir!".to_string()),
            everything_fan.message()
        );
    }

    #[test]
    fn test_detached_topic_is_not_delivered() {
        // Given
        let mediators = topic_mediators();
        let mut yahoo = opened("YAHOO", &mediators);
        let fan = Subscriber::new("PoliticsAndSportsFan");
        yahoo.attach(fan.clone(), Some(Topic::Politics));
        yahoo.attach(fan.clone(), Some(Topic::Sports));

        // When
        yahoo.detach(&fan, Some(Topic::Sports));
        yahoo.new_post(Post::new(Topic::Sports, "Galatasaray lost to TrabzonSpor."));
        yahoo.new_post(Post::new(
            Topic::Politics,
            "Professor Ufuk is now prime minister!",
        ));

        // Then
        assert_eq!(1, fan.notification_count());
        assert_eq!(
            Some("Professor Ufuk is now prime minister!".to_string()),
            fan.message()
        );
    }

    #[test]
    fn test_subscriber_update() {
        // Given
        let mediators = topic_mediators();
        let mut yahoo = opened("YAHOO", &mediators);
        let subscriber = Subscriber::new("MusicFan");

        // When
        subscriber.update(&yahoo, Topic::Music);

        // Then
        assert_eq!(0, subscriber.notification_count(), "Should skip empty sites");

        // When
        yahoo.new_post(Post::new(Topic::Music, "Tarkan is in Izmir!"));
        subscriber.update(&yahoo, Topic::Music);

        // Then
        assert_eq!("MusicFan", subscriber.name());
        assert_eq!(Some(yahoo.id()), subscriber.site_id());
        assert_eq!(Some("YAHOO".to_string()), subscriber.site_name());
        assert_eq!(Some("Tarkan is in Izmir!".to_string()), subscriber.message());
        assert_eq!(1, subscriber.notification_count());
    }

    #[test]
    fn test_each_post_fires_one_topic() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let mediators = topic_mediators();
        let mut yahoo = opened("YAHOO", &mediators);
        let recorder = Recorder::new(|_: &MailSite, topic: Topic| topic);
        yahoo.attach(recorder.clone(), None);
        let topics = Topic::iter().collect::<Vec<_>>();

        for round in 0..100 {
            // When
            let topic = *topics.choose(&mut rng).unwrap();
            yahoo.new_post(Post::new(topic, format!("post {round}")));

            // Then
            assert_eq!(
                vec![topic],
                recorder.take(),
                "Should only fire the {topic} mediator"
            );
        }

        // When
        let silenced = *topics.choose(&mut rng).unwrap();
        yahoo.detach(&recorder, Some(silenced));
        for _ in 0..20 {
            let topic = *topics.choose(&mut rng).unwrap();
            let message = format!("{}", rng.gen::<u32>());
            yahoo.new_post(Post::new(topic, message));
        }

        // Then
        assert!(
            recorder.records().iter().all(|topic| *topic != silenced),
            "Should no longer deliver {silenced} posts"
        );
    }
}
