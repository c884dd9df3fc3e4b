//! Every operation resolves its URL from one of the tables below. The
//! defaults point at the public API; [`Endpoints::with_base`] moves all of
//! them under another root, which is how the tests reach a mock server.

/// Root of the public API.
pub const API_ROOT: &str = "https://disqus.com/api/3.0";

macro_rules! url_table {
    ($(#[$meta:meta])* $name:ident { $($(#[$fmeta:meta])* $field:ident => $path:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: String),+
        }

        impl $name {
            /// Builds the table under `base` (no trailing slash needed).
            pub fn with_base(base: &str) -> Self {
                let base = base.trim_end_matches('/');
                Self {
                    $($field: format!("{base}/{}", $path)),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::with_base(API_ROOT)
            }
        }
    };
}

url_table! {
    /// URLs of the `forums/*` operations.
    ForumsUrls {
        /// `forums/interestingForums`
        interesting => "forums/interestingForums.json",
        /// `forums/details`
        details => "forums/details.json",
        /// `forums/listCategories`
        categories => "forums/listCategories.json",
        /// `forums/listUsers`
        users => "forums/listUsers.json",
        /// `forums/listThreads`
        threads => "forums/listThreads.json",
        /// `forums/listMostLikedUsers`
        most_liked_users => "forums/listMostLikedUsers.json",
        /// `forums/listFollowers`
        followers => "forums/listFollowers.json",
        /// `forums/listMostActiveUsers`
        most_active_users => "forums/listMostActiveUsers.json",
    }
}

url_table! {
    /// URLs of the `threads/*` operations (and `trends/listThreads`).
    ThreadsUrls {
        /// `threads/list`
        list => "threads/list.json",
        /// `threads/details`
        details => "threads/details.json",
        /// `threads/listPosts`
        posts => "threads/listPosts.json",
        /// `threads/listHot`
        hot => "threads/listHot.json",
        /// `threads/listPopular`
        popular => "threads/listPopular.json",
        /// `trends/listThreads`
        trending => "trends/listThreads.json",
        /// `threads/listUsersVotedThread`
        users_voted => "threads/listUsersVotedThread.json",
        /// `threads/set`
        set => "threads/set.json",
    }
}

url_table! {
    /// URLs of the `posts/*` operations.
    PostsUrls {
        /// `posts/details`
        details => "posts/details.json",
        /// `posts/list`
        list => "posts/list.json",
        /// `posts/listPopular`
        popular => "posts/listPopular.json",
    }
}

url_table! {
    /// URLs of the `users/*` operations.
    UsersUrls {
        /// `users/details`
        details => "users/details.json",
        /// `users/interestingUsers`
        interesting => "users/interestingUsers.json",
        /// `users/listPosts`
        posts => "users/listPosts.json",
        /// `users/listActiveForums`
        active_forums => "users/listActiveForums.json",
        /// `users/listFollowers`
        followers => "users/listFollowers.json",
        /// `users/listFollowing`
        following => "users/listFollowing.json",
        /// `users/listFollowingForums`
        following_forums => "users/listFollowingForums.json",
        /// `users/listActivity`
        activity => "users/listActivity.json",
        /// `users/listMostActiveForums`
        most_active_forums => "users/listMostActiveForums.json",
    }
}

/// The URL tables of all four resource groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    /// Forum operations.
    pub forums: ForumsUrls,
    /// Thread operations.
    pub threads: ThreadsUrls,
    /// Post operations.
    pub posts: PostsUrls,
    /// User operations.
    pub users: UsersUrls,
}

impl Endpoints {
    /// Builds every table under `base`, keeping each operation's path.
    pub fn with_base(base: &str) -> Self {
        Self {
            forums: ForumsUrls::with_base(base),
            threads: ThreadsUrls::with_base(base),
            posts: PostsUrls::with_base(base),
            users: UsersUrls::with_base(base),
        }
    }
}
