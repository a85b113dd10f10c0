//! 静态数据表

/// 各章（按章序）的名称与经文数
pub(super) const SURAHS: [(&str, i32); 114] = [
    ("Al-Fatihah", 7),
    ("Al-Baqarah", 286),
    ("Ali 'Imran", 200),
    ("An-Nisa", 176),
    ("Al-Ma'idah", 120),
    ("Al-An'am", 165),
    ("Al-A'raf", 206),
    ("Al-Anfal", 75),
    ("At-Tawbah", 129),
    ("Yunus", 109),
    ("Hud", 123),
    ("Yusuf", 111),
    ("Ar-Ra'd", 43),
    ("Ibrahim", 52),
    ("Al-Hijr", 99),
    ("An-Nahl", 128),
    ("Al-Isra", 111),
    ("Al-Kahf", 110),
    ("Maryam", 98),
    ("Taha", 135),
    ("Al-Anbya", 112),
    ("Al-Hajj", 78),
    ("Al-Mu'minun", 118),
    ("An-Nur", 64),
    ("Al-Furqan", 77),
    ("Ash-Shu'ara", 227),
    ("An-Naml", 93),
    ("Al-Qasas", 88),
    ("Al-'Ankabut", 69),
    ("Ar-Rum", 60),
    ("Luqman", 34),
    ("As-Sajdah", 30),
    ("Al-Ahzab", 73),
    ("Saba", 54),
    ("Fatir", 45),
    ("Ya-Sin", 83),
    ("As-Saffat", 182),
    ("Sad", 88),
    ("Az-Zumar", 75),
    ("Ghafir", 85),
    ("Fussilat", 54),
    ("Ash-Shuraa", 53),
    ("Az-Zukhruf", 89),
    ("Ad-Dukhan", 59),
    ("Al-Jathiyah", 37),
    ("Al-Ahqaf", 35),
    ("Muhammad", 38),
    ("Al-Fath", 29),
    ("Al-Hujurat", 18),
    ("Qaf", 45),
    ("Adh-Dhariyat", 60),
    ("At-Tur", 49),
    ("An-Najm", 62),
    ("Al-Qamar", 55),
    ("Ar-Rahman", 78),
    ("Al-Waqi'ah", 96),
    ("Al-Hadid", 29),
    ("Al-Mujadila", 22),
    ("Al-Hashr", 24),
    ("Al-Mumtahanah", 13),
    ("As-Saf", 14),
    ("Al-Jumu'ah", 11),
    ("Al-Munafiqun", 11),
    ("At-Taghabun", 18),
    ("At-Talaq", 12),
    ("At-Tahrim", 12),
    ("Al-Mulk", 30),
    ("Al-Qalam", 52),
    ("Al-Haqqah", 52),
    ("Al-Ma'arij", 44),
    ("Nuh", 28),
    ("Al-Jinn", 28),
    ("Al-Muzzammil", 20),
    ("Al-Muddaththir", 56),
    ("Al-Qiyamah", 40),
    ("Al-Insan", 31),
    ("Al-Mursalat", 50),
    ("An-Naba", 40),
    ("An-Nazi'at", 46),
    ("'Abasa", 42),
    ("At-Takwir", 29),
    ("Al-Infitar", 19),
    ("Al-Mutaffifin", 36),
    ("Al-Inshiqaq", 25),
    ("Al-Buruj", 22),
    ("At-Tariq", 17),
    ("Al-A'la", 19),
    ("Al-Ghashiyah", 26),
    ("Al-Fajr", 30),
    ("Al-Balad", 20),
    ("Ash-Shams", 15),
    ("Al-Layl", 21),
    ("Ad-Duhaa", 11),
    ("Ash-Sharh", 8),
    ("At-Tin", 8),
    ("Al-'Alaq", 19),
    ("Al-Qadr", 5),
    ("Al-Bayyinah", 8),
    ("Az-Zalzalah", 8),
    ("Al-'Adiyat", 11),
    ("Al-Qari'ah", 11),
    ("At-Takathur", 8),
    ("Al-'Asr", 3),
    ("Al-Humazah", 9),
    ("Al-Fil", 5),
    ("Quraysh", 4),
    ("Al-Ma'un", 7),
    ("Al-Kawthar", 3),
    ("Al-Kafirun", 6),
    ("An-Nasr", 3),
    ("Al-Masad", 5),
    ("Al-Ikhlas", 4),
    ("Al-Falaq", 5),
    ("An-Nas", 6),
];

/// 60 个 hizb 的起始位置 `(surah, ayah)`
pub(super) const HIZB_STARTS: [(i32, i32); 60] = [
    (1, 1), (2, 75), (2, 142), (2, 203), (2, 253), (3, 15), (3, 93), (3, 171), (4, 24), (4, 88),
    (4, 148), (5, 27), (5, 82), (6, 36), (6, 111), (7, 1), (7, 88), (7, 171), (8, 41), (9, 34),
    (9, 93), (10, 26), (11, 6), (11, 84), (12, 53), (13, 19), (15, 1), (16, 51), (17, 1),
    (17, 99), (18, 75), (20, 1), (21, 1), (22, 1), (23, 1), (24, 21), (25, 21), (26, 111),
    (27, 56), (28, 51), (29, 46), (31, 22), (33, 31), (34, 24), (36, 28), (37, 145), (39, 32),
    (40, 41), (41, 47), (43, 24), (46, 1), (48, 18), (51, 31), (55, 1), (58, 1), (62, 1),
    (67, 1), (72, 1), (78, 1), (87, 1),
];
