// SPDX-License-Identifier: PMPL-1.0-or-later

//! Master dictionary table.
//!
//! Each row is `(id, code, meaning key, category)`. Codes are
//! language-neutral; meanings are resolved through the translation tables
//! in `locales/`. Ids are stable and must never be reused because they key
//! the persisted explanation cache.

use crate::types::{Category, EntryId};

pub(super) const MASTER: &[(EntryId, &str, &str, Category)] = &[
    // Dangerous
    (1, "53X", "code_1_meaning", Category::Dangerous),
    (2, "KMS", "code_2_meaning", Category::Dangerous),
    (3, "LH6", "code_3_meaning", Category::Dangerous),
    (4, "MOS", "code_4_meaning", Category::Dangerous),
    (5, "DOS", "code_5_meaning", Category::Dangerous),
    (6, "POS", "code_6_meaning", Category::Dangerous),
    (7, "CD9", "code_7_meaning", Category::Dangerous),
    (8, "LMIRL", "code_8_meaning", Category::Dangerous),
    (9, "CU46", "code_9_meaning", Category::Dangerous),
    (10, "99", "code_10_meaning", Category::Dangerous),
    (11, "505", "code_11_meaning", Category::Dangerous),
    (12, "11:11", "code_12_meaning", Category::Dangerous),
    (13, "273", "code_13_meaning", Category::Dangerous),
    (14, "171", "code_14_meaning", Category::Dangerous),
    (15, "363", "code_15_meaning", Category::Dangerous),
    (16, "909", "code_16_meaning", Category::Dangerous),
    (17, "770", "code_17_meaning", Category::Dangerous),
    (18, "297", "code_18_meaning", Category::Dangerous),
    (19, "028", "code_19_meaning", Category::Dangerous),
    (20, "988", "code_20_meaning", Category::Dangerous),
    (21, "29", "code_21_meaning", Category::Dangerous),
    (22, "1423", "code_22_meaning", Category::Dangerous),
    (23, "❄️🎱", "code_23_meaning", Category::Dangerous),
    (24, "💜💎", "code_24_meaning", Category::Dangerous),
    (25, "💙💎", "code_25_meaning", Category::Dangerous),
    (26, "🍄", "code_26_meaning", Category::Dangerous),
    (27, "🍀🍄🔥", "code_27_meaning", Category::Dangerous),

    // Predator
    (28, "Cheese pizza", "code_28_meaning", Category::Predator),
    (29, "Touch the ceiling", "code_29_meaning", Category::Predator),
    (30, "Nip Nops", "code_30_meaning", Category::Predator),
    (31, "Blue / Orange Youtube", "code_31_meaning", Category::Predator),
    (32, "🔼", "code_32_meaning", Category::Predator),
    (33, "💗", "code_33_meaning", Category::Predator),
    (34, "🦋", "code_34_meaning", Category::Predator),

    // Dangerous, general
    (35, "Big back", "code_35_meaning", Category::Dangerous),
    (36, "Body count", "code_36_meaning", Category::Dangerous),
    (37, "Crossfaded", "code_37_meaning", Category::Dangerous),
    (38, "Dox", "code_38_meaning", Category::Dangerous),
    (39, "DTF", "code_39_meaning", Category::Dangerous),
    (40, "FBOI", "code_40_meaning", Category::Dangerous),
    (41, "Faded", "code_41_meaning", Category::Dangerous),
    (42, "Flavored air", "code_42_meaning", Category::Dangerous),
    (43, "FML", "code_43_meaning", Category::Dangerous),
    (44, "Fugly", "code_44_meaning", Category::Dangerous),
    (45, "FWB", "code_45_meaning", Category::Dangerous),
    (46, "Hammered", "code_46_meaning", Category::Dangerous),
    (47, "Juul", "code_47_meaning", Category::Dangerous),
    (48, "Krunk", "code_48_meaning", Category::Dangerous),
    (49, "KYS", "code_49_meaning", Category::Dangerous),
    (50, "Plug", "code_50_meaning", Category::Dangerous),
    (51, "Ran through", "code_51_meaning", Category::Dangerous),
    (52, "Smash", "code_52_meaning", Category::Dangerous),
    (53, "Smut", "code_53_meaning", Category::Dangerous),
    (54, "Sparks", "code_54_meaning", Category::Dangerous),
    (55, "Thot", "code_55_meaning", Category::Dangerous),
    (56, "Thirst Trap", "code_56_meaning", Category::Dangerous),
    (57, "Trap phone", "code_57_meaning", Category::Dangerous),
    (58, "Xan", "code_58_meaning", Category::Dangerous),

    // Harmless, with a few dangerous entries interleaved
    (59, "Addy", "code_59_meaning", Category::Harmless),
    (60, "AF", "code_60_meaning", Category::Harmless),
    (61, "Amirite", "code_61_meaning", Category::Harmless),
    (62, "Amped", "code_62_meaning", Category::Harmless),
    (63, "And I oop", "code_63_meaning", Category::Harmless),
    (64, "ASL", "code_64_meaning", Category::Harmless),
    (65, "Ate and left no crumbs", "code_65_meaning", Category::Harmless),
    (66, "Aura", "code_66_meaning", Category::Harmless),
    (67, "Bae", "code_67_meaning", Category::Harmless),
    (68, "Bandwagon", "code_68_meaning", Category::Harmless),
    (69, "Basic", "code_69_meaning", Category::Harmless),
    (70, "BBG", "code_70_meaning", Category::Harmless),
    (71, "BDE", "code_71_meaning", Category::Harmless),
    (72, "Bed rot", "code_72_meaning", Category::Harmless),
    (73, "Beige flag", "code_73_meaning", Category::Harmless),
    (74, "Bet", "code_74_meaning", Category::Harmless),
    (75, "Bih", "code_75_meaning", Category::Harmless),
    (76, "Boo", "code_76_meaning", Category::Harmless),
    (77, "Boo’d up", "code_77_meaning", Category::Harmless),
    (78, "Boomer/Okay Boomer", "code_78_meaning", Category::Harmless),
    (79, "Boujee", "code_79_meaning", Category::Harmless),
    (80, "Brat", "code_80_meaning", Category::Harmless),
    (81, "Bussin’", "code_81_meaning", Category::Harmless),
    (82, "Buttah", "code_82_meaning", Category::Harmless),
    (83, "Cake", "code_83_meaning", Category::Harmless),
    (84, "Cap", "code_84_meaning", Category::Harmless),
    (85, "Cash", "code_85_meaning", Category::Harmless),
    (86, "Catch feels", "code_86_meaning", Category::Harmless),
    (87, "Catfish", "code_87_meaning", Category::Harmless),
    (88, "Caught in 4k", "code_88_meaning", Category::Harmless),
    (89, "Chad", "code_89_meaning", Category::Harmless),
    (90, "Chat", "code_90_meaning", Category::Harmless),
    (91, "Cheugy", "code_91_meaning", Category::Harmless),
    (92, "Clapback", "code_92_meaning", Category::Harmless),
    (93, "Cooked", "code_93_meaning", Category::Harmless),
    (94, "Crash out", "code_94_meaning", Category::Harmless),
    (95, "Cray cray", "code_95_meaning", Category::Harmless),
    (96, "Cringe", "code_96_meaning", Category::Harmless),
    (97, "Curve", "code_97_meaning", Category::Harmless),
    (98, "Dank", "code_98_meaning", Category::Harmless),
    (99, "Dap", "code_99_meaning", Category::Harmless),
    (100, "Dayroom", "code_100_meaning", Category::Harmless),
    (101, "Dead/Dying/Ded", "code_101_meaning", Category::Harmless),
    (102, "Delulu", "code_102_meaning", Category::Harmless),
    (103, "Dip", "code_103_meaning", Category::Harmless),
    (104, "DL", "code_104_meaning", Category::Harmless),
    (105, "Dope", "code_105_meaning", Category::Harmless),
    (106, "Drag", "code_106_meaning", Category::Harmless),
    (107, "Drip", "code_107_meaning", Category::Harmless),
    (108, "Dub", "code_108_meaning", Category::Harmless),
    (109, "Egirl/Eboy", "code_109_meaning", Category::Harmless),
    (110, "Extra", "code_110_meaning", Category::Harmless),
    (111, "Facts", "code_111_meaning", Category::Harmless),
    (112, "Fan service", "code_112_meaning", Category::Harmless),
    (113, "FFA", "code_113_meaning", Category::Harmless),
    (114, "Finna", "code_114_meaning", Category::Harmless),
    (115, "Finsta", "code_115_meaning", Category::Harmless),
    (116, "Fire", "code_116_meaning", Category::Harmless),
    (117, "Fit", "code_117_meaning", Category::Harmless),
    (118, "Flex", "code_118_meaning", Category::Harmless),
    (119, "FR", "code_119_meaning", Category::Harmless),
    (120, "FRFR", "code_120_meaning", Category::Harmless),
    (121, "FTW", "code_121_meaning", Category::Harmless),
    (122, "Fuhuhluhtoogan", "code_122_meaning", Category::Harmless),
    (123, "Furry", "code_123_meaning", Category::Harmless),
    (124, "FW", "code_124_meaning", Category::Harmless),
    (125, "FYP", "code_125_meaning", Category::Harmless),
    (126, "G", "code_126_meaning", Category::Harmless),
    (127, "Gassing", "code_127_meaning", Category::Harmless),
    (128, "GG", "code_128_meaning", Category::Harmless),
    (129, "Ghost", "code_129_meaning", Category::Harmless),
    (130, "Girl math", "code_130_meaning", Category::Harmless),
    (131, "Girl dinner", "code_131_meaning", Category::Harmless),
    (132, "Gigachad", "code_132_meaning", Category::Harmless),
    (133, "Giving me life", "code_133_meaning", Category::Harmless),
    (134, "Glow-up", "code_134_meaning", Category::Harmless),
    (135, "GOAT", "code_135_meaning", Category::Harmless),
    (136, "Granola", "code_136_meaning", Category::Harmless),
    (137, "Guap", "code_137_meaning", Category::Harmless),
    (138, "Gucci", "code_138_meaning", Category::Harmless),
    (139, "Gyat", "code_139_meaning", Category::Harmless),
    (140, "Heated", "code_140_meaning", Category::Harmless),
    (141, "Heem", "code_141_meaning", Category::Harmless),
    (142, "Hella Skrilla", "code_142_meaning", Category::Harmless),
    (143, "Here for this", "code_143_meaning", Category::Harmless),
    (144, "High key", "code_144_meaning", Category::Harmless),
    (145, "Highlighter kid", "code_145_meaning", Category::Harmless),
    (146, "Hits different", "code_146_meaning", Category::Harmless),
    (147, "Hollywood", "code_147_meaning", Category::Harmless),
    (148, "Hop off", "code_148_meaning", Category::Harmless),
    (149, "Hot take", "code_149_meaning", Category::Harmless),
    (150, "Hunty", "code_150_meaning", Category::Harmless),
    (151, "Hype", "code_151_meaning", Category::Harmless),
    (152, "Ick", "code_152_meaning", Category::Harmless),
    (153, "ICYMI", "code_153_meaning", Category::Harmless),
    (154, "IRL", "code_154_meaning", Category::Harmless),
    (155, "ISO", "code_155_meaning", Category::Harmless),
    (156, "IYKYK", "code_156_meaning", Category::Harmless),
    (157, "Jittleyang", "code_157_meaning", Category::Harmless),
    (158, "KDA", "code_158_meaning", Category::Harmless),
    (159, "Keep it 100", "code_159_meaning", Category::Harmless),
    (160, "L", "code_160_meaning", Category::Harmless),
    (161, "Left on read", "code_161_meaning", Category::Harmless),
    (162, "Let them cook", "code_162_meaning", Category::Harmless),
    (163, "Let’s get this bread", "code_163_meaning", Category::Harmless),
    (164, "Lewk", "code_164_meaning", Category::Harmless),
    (165, "LFG", "code_165_meaning", Category::Harmless),
    (166, "Lit", "code_166_meaning", Category::Harmless),
    (167, "LMAO", "code_167_meaning", Category::Harmless),
    (168, "LMS", "code_168_meaning", Category::Harmless),
    (169, "LOL", "code_169_meaning", Category::Harmless),
    (170, "Looksmaxxing", "code_170_meaning", Category::Harmless),
    (171, "Low taper fade", "code_171_meaning", Category::Harmless),
    (172, "Mad", "code_172_meaning", Category::Harmless),
    (173, "Menty b", "code_173_meaning", Category::Harmless),
    (174, "Mewing", "code_174_meaning", Category::Harmless),
    (175, "Mid", "code_175_meaning", Category::Harmless),
    (176, "Mogging", "code_176_meaning", Category::Harmless),
    (177, "Munch", "code_177_meaning", Category::Harmless),
    (178, "Netflix and chill", "code_178_meaning", Category::Harmless),
    (179, "NGL", "code_179_meaning", Category::Harmless),
    (180, "NSFW", "code_180_meaning", Category::Harmless),
    (181, "OMG", "code_181_meaning", Category::Harmless),
    (182, "OML", "code_182_meaning", Category::Harmless),
    (183, "OMW", "code_183_meaning", Category::Harmless),
    (184, "ONG", "code_184_meaning", Category::Harmless),
    (185, "On fleek", "code_185_meaning", Category::Harmless),
    (186, "On point", "code_186_meaning", Category::Harmless),
    (187, "Only in Ohio", "code_187_meaning", Category::Harmless),
    (188, "Ops", "code_188_meaning", Category::Harmless),
    (189, "OTP", "code_189_meaning", Category::Harmless),
    (190, "Periodt", "code_190_meaning", Category::Harmless),
    (191, "PMOYS", "code_191_meaning", Category::Harmless),
    (192, "Poggers", "code_192_meaning", Category::Harmless),
    (193, "Preppy", "code_193_meaning", Category::Harmless),
    (194, "Pressed", "code_194_meaning", Category::Harmless),
    (195, "Pulling", "code_195_meaning", Category::Harmless),
    (196, "Put on blast", "code_196_meaning", Category::Harmless),
    (197, "Pwn", "code_197_meaning", Category::Harmless),
    (198, "Rad", "code_198_meaning", Category::Harmless),
    (199, "Ratchet", "code_199_meaning", Category::Harmless),
    (200, "Read", "code_200_meaning", Category::Harmless),
    (201, "Real", "code_201_meaning", Category::Harmless),
    (202, "Receipts", "code_202_meaning", Category::Harmless),
    (203, "Rent free", "code_203_meaning", Category::Harmless),
    (204, "Rizz", "code_204_meaning", Category::Harmless),
    (205, "ROTFLMAO", "code_205_meaning", Category::Harmless),
    (206, "RN", "code_206_meaning", Category::Harmless),
    (207, "RPG", "code_207_meaning", Category::Harmless),
    (208, "Salty", "code_208_meaning", Category::Harmless),
    (209, "Savage", "code_209_meaning", Category::Harmless),
    (210, "Say less", "code_210_meaning", Category::Harmless),
    (211, "Sending me", "code_211_meaning", Category::Harmless),
    (212, "Shade", "code_212_meaning", Category::Harmless),
    (213, "Ship", "code_213_meaning", Category::Harmless),
    (214, "Shook", "code_214_meaning", Category::Harmless),
    (215, "Shorty", "code_215_meaning", Category::Harmless),
    (216, "Sick", "code_216_meaning", Category::Harmless),
    (217, "Sigma", "code_217_meaning", Category::Harmless),
    (218, "Simp", "code_218_meaning", Category::Harmless),
    (219, "Skibidi Toilet", "code_219_meaning", Category::Harmless),
    (220, "Slap", "code_220_meaning", Category::Harmless),
    (221, "Slay", "code_221_meaning", Category::Harmless),
    (222, "Slim thick/thicc", "code_222_meaning", Category::Harmless),
    (223, "Small dick energy", "code_223_meaning", Category::Harmless),
    (224, "SMH", "code_224_meaning", Category::Harmless),
    (225, "Smol", "code_225_meaning", Category::Harmless),
    (226, "Snack", "code_226_meaning", Category::Harmless),
    (227, "Snatched", "code_227_meaning", Category::Harmless),
    (228, "Sneaky link", "code_228_meaning", Category::Harmless),
    (229, "SO", "code_229_meaning", Category::Harmless),
    (230, "Stan", "code_230_meaning", Category::Harmless),
    (231, "Stoked", "code_231_meaning", Category::Harmless),
    (232, "Sus", "code_232_meaning", Category::Harmless),
    (233, "Swerve", "code_233_meaning", Category::Harmless),
    (234, "Swole", "code_234_meaning", Category::Harmless),
    (235, "Swoop", "code_235_meaning", Category::Harmless),
    (236, "Take a seat", "code_236_meaning", Category::Harmless),
    (237, "Tea", "code_237_meaning", Category::Harmless),
    (238, "TF", "code_238_meaning", Category::Harmless),
    (239, "TFW", "code_239_meaning", Category::Harmless),
    (240, "Totes", "code_240_meaning", Category::Harmless),
    (241, "Touch grass", "code_241_meaning", Category::Harmless),
    (242, "Twin", "code_242_meaning", Category::Harmless),
    (243, "Twizzy", "code_243_meaning", Category::Harmless),
    (244, "Uhh", "code_244_meaning", Category::Harmless),
    (245, "Unc", "code_245_meaning", Category::Harmless),
    (246, "Understood the assignment", "code_246_meaning", Category::Harmless),
    (247, "Upper decky", "code_247_meaning", Category::Dangerous),
    (248, "V", "code_248_meaning", Category::Harmless),
    (249, "Vanilla", "code_249_meaning", Category::Harmless),
    (250, "Vibe", "code_250_meaning", Category::Harmless),
    (251, "VSCO girl", "code_251_meaning", Category::Harmless),
    (252, "W", "code_252_meaning", Category::Harmless),
    (253, "Wallflower", "code_253_meaning", Category::Harmless),
    (254, "Weird flex but ok", "code_254_meaning", Category::Harmless),
    (255, "Whip", "code_255_meaning", Category::Harmless),
    (256, "Whole meal", "code_256_meaning", Category::Harmless),
    (257, "Wig snatched", "code_257_meaning", Category::Harmless),
    (258, "Woke", "code_258_meaning", Category::Harmless),
    (259, "WYA", "code_259_meaning", Category::Harmless),
    (260, "WYD", "code_260_meaning", Category::Harmless),
    (261, "YAAS", "code_261_meaning", Category::Harmless),
    (262, "Yeet", "code_262_meaning", Category::Harmless),
    (263, "Zaddy", "code_263_meaning", Category::Harmless),
    (264, "6-7", "code_264_meaning", Category::Harmless),
];
