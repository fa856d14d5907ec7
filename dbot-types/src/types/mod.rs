//! Every entity the platform sends or accepts, grouped by area.

mod chat;
mod game;
mod inline;
mod input_content;
mod input_media;
mod keyboard;
mod media;
mod message;
mod passport;
mod payments;
mod poll;
mod response;
mod sticker;
mod update;
mod user;

pub use chat::{
    Chat, ChatId, ChatInviteLink, ChatLocation, ChatMember, ChatMemberUpdated, ChatPermissions,
    ChatPhoto, ChatType,
};
pub use game::{CallbackGame, Game, GameHighScore};
pub use inline::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InlineQueryResultAudio, InlineQueryResultCachedAudio, InlineQueryResultCachedDocument,
    InlineQueryResultCachedGif, InlineQueryResultCachedMpeg4Gif, InlineQueryResultCachedPhoto,
    InlineQueryResultCachedSticker, InlineQueryResultCachedVideo, InlineQueryResultCachedVoice,
    InlineQueryResultContact, InlineQueryResultDocument, InlineQueryResultGame,
    InlineQueryResultGif, InlineQueryResultLocation, InlineQueryResultMpeg4Gif,
    InlineQueryResultPhoto, InlineQueryResultVenue, InlineQueryResultVideo,
    InlineQueryResultVoice,
};
pub use input_content::{
    InputContactMessageContent, InputLocationMessageContent, InputMessageContent,
    InputTextMessageContent, InputVenueMessageContent,
};
pub use input_media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo,
};
pub use keyboard::{
    CallbackQuery, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardButtonPollType, KeyboardOption, LoginUrl, ReplyKeyboardMarkup, ReplyKeyboardRemove,
};
pub use media::{
    Animation, Audio, Contact, Document, File, Location, PhotoSize, Venue, Video, VideoNote, Voice,
};
pub use message::{
    Dice, Message, MessageAutoDeleteTimerChanged, MessageEntity, MessageEntityType, MessageId,
    ParseMode, ProximityAlertTriggered, VoiceChatEnded, VoiceChatParticipantsInvited,
    VoiceChatStarted,
};
pub use passport::{
    EncryptedCredentials, EncryptedPassportElement, PassportData, PassportElementError,
    PassportElementErrorDataField, PassportElementErrorFile, PassportElementErrorFiles,
    PassportElementErrorFrontSide, PassportElementErrorReverseSide, PassportElementErrorSelfie,
    PassportElementErrorTranslationFile, PassportElementErrorTranslationFiles,
    PassportElementErrorUnspecified, PassportElementType, PassportFile,
};
pub use payments::{
    Invoice, LabeledPrice, OrderInfo, PreCheckoutQuery, ShippingAddress, ShippingOption,
    ShippingQuery, SuccessfulPayment,
};
pub use poll::{Poll, PollAnswer, PollOption, PollType};
pub use response::{ApiResponse, MessageOrTrue, ResponseParameters};
pub use sticker::{MaskPoint, MaskPosition, Sticker, StickerSet};
pub use update::{Update, UpdateKind, WebhookInfo};
pub use user::{BotCommand, User, UserProfilePhotos};
